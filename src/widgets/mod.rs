// Reusable UI widgets

pub mod controls;
pub mod logo;
pub mod otp_input;
pub mod text_input;
pub mod toast;

pub use controls::{Button, Checkbox, Link, SliderWidget, SLIDER_HEIGHT};
pub use logo::{LuluLogo, Size};
pub use otp_input::{OtpInputWidget, OtpInputWidgetExt, OTP_HEIGHT, OTP_WIDTH};
pub use text_input::{TextInputWidget, TextInputWidgetExt, FIELD_HEIGHT};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
