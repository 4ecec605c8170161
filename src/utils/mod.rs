pub mod form;
pub mod layout;
pub mod otp;
pub mod path;
pub mod slider;
pub mod text_input;
pub mod validation;

pub use form::{cycle_next, cycle_prev, edit_text, interpret, FormKey};
pub use layout::{card_area, center_popup, create_split_layout, create_standard_layout, stack_rows};
pub use otp::OtpCode;
pub use path::{format_path_for_display, get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use slider::UsageSlider;
pub use text_input::TextInput;
