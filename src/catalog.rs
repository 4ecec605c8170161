//! Hard-coded product data used by the onboarding screens.
//!
//! Nothing here is computed from user input except the feature totals; the
//! usage estimate is a fixed recommendation.

/// An add-on the customer can activate on the features step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Approximate monthly credit consumption
    pub credits: u32,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "voice",
        name: "AI Voice Agent",
        description: "Automated voice calls with natural AI",
        credits: 2000,
    },
    Feature {
        id: "sms",
        name: "SMS Automation",
        description: "Send and manage text messages",
        credits: 1500,
    },
    Feature {
        id: "whatsapp",
        name: "WhatsApp Automation",
        description: "Connect with customers on WhatsApp",
        credits: 1800,
    },
    Feature {
        id: "receptionist",
        name: "AI Receptionist",
        description: "24/7 virtual receptionist service",
        credits: 2500,
    },
    Feature {
        id: "crm",
        name: "CRM & Pipelines",
        description: "Manage deals and customer relationships",
        credits: 1000,
    },
    Feature {
        id: "analytics",
        name: "Analytics & Reports",
        description: "Detailed insights and performance metrics",
        credits: 800,
    },
];

/// Features pre-selected when the features step opens.
pub const DEFAULT_FEATURES: &[&str] = &["voice", "crm", "analytics"];

pub fn feature(id: &str) -> Option<&'static Feature> {
    FEATURES.iter().find(|f| f.id == id)
}

/// Sum of the credit cost of the given feature ids. Unknown ids count as zero.
pub fn total_credits<'a>(ids: impl IntoIterator<Item = &'a str>) -> u32 {
    ids.into_iter()
        .filter_map(feature)
        .map(|f| f.credits)
        .sum()
}

/// Monthly cost in whole dollars: one dollar per hundred credits, rounded half up.
pub fn estimated_cost(credits: u32) -> u32 {
    (credits + 50) / 100
}

/// Business categories offered on the details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessType {
    pub value: &'static str,
    pub label: &'static str,
}

pub const OTHER_BUSINESS_TYPE: &str = "other";

pub const BUSINESS_TYPES: &[BusinessType] = &[
    BusinessType { value: "saas", label: "SaaS" },
    BusinessType { value: "ecommerce", label: "E-commerce" },
    BusinessType { value: "agency", label: "Agency" },
    BusinessType { value: "consulting", label: "Consulting" },
    BusinessType { value: "retail", label: "Retail" },
    BusinessType { value: "healthcare", label: "Healthcare" },
    BusinessType { value: "education", label: "Education" },
    BusinessType { value: OTHER_BUSINESS_TYPE, label: "Other" },
];

/// Definition of one usage slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

pub const USAGE_SLIDERS: &[SliderSpec] = &[
    SliderSpec {
        id: "contacts",
        label: "Number of Contacts",
        unit: "contacts",
        min: 0,
        max: 10_000,
        step: 100,
        default: 1000,
    },
    SliderSpec {
        id: "phonePercentage",
        label: "% of contacts to connect daily over phone",
        unit: "% daily",
        min: 0,
        max: 100,
        step: 5,
        default: 25,
    },
    SliderSpec {
        id: "dailyEmails",
        label: "Number of emails to automate daily",
        unit: "emails/day",
        min: 0,
        max: 500,
        step: 10,
        default: 50,
    },
    SliderSpec {
        id: "dailyMessages",
        label: "Number of messages to automate daily",
        unit: "messages/day",
        min: 0,
        max: 300,
        step: 5,
        default: 30,
    },
    SliderSpec {
        id: "marketResearch",
        label: "Lulu market research usage per week",
        unit: "times/week",
        min: 0,
        max: 20,
        step: 1,
        default: 5,
    },
];

/// The recommendation shown on the estimate step. Fixed regardless of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub credits: u32,
    pub monthly_cost: u32,
    pub plan: &'static str,
    pub buffer_percent: u32,
}

pub const ESTIMATE: Estimate = Estimate {
    credits: 12_500,
    monthly_cost: 149,
    plan: "Professional",
    buffer_percent: 20,
};

/// Dashboard setup checklist entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SETUP_CHECKLIST: &[ChecklistEntry] = &[
    ChecklistEntry {
        title: "Complete your profile",
        description: "Add your photo and preferences",
    },
    ChecklistEntry {
        title: "Connect your first channel",
        description: "Set up phone, SMS, or WhatsApp",
    },
    ChecklistEntry {
        title: "Invite team members",
        description: "Collaborate with your team",
    },
    ChecklistEntry {
        title: "Import your contacts",
        description: "Upload or sync your customer data",
    },
];

/// Quick actions offered on the dashboard.
pub const QUICK_ACTIONS: &[&str] = &["Connect channels", "Add team members", "Ask AI"];

/// Group digits with commas (12500 -> "12,500").
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
