//! Number type labels
//!
//! The body line of a call log entry names the kind of number that was
//! called: "Mobile", "Work", a user-defined custom label, or the plugin
//! that handled the call.

/// Number type code for user-labelled numbers
pub const TYPE_CUSTOM: i32 = 0;

/// Number type code for an assistant's number, which may also carry a label
pub const TYPE_ASSISTANT: i32 = 19;

/// Resolves the label shown under a call log number
pub trait NumberLabelResolver: Send + Sync {
    fn label_for_call(
        &self,
        number: Option<&str>,
        number_type: i32,
        custom_label: Option<&str>,
        plugin_name: Option<&str>,
    ) -> String;
}

/// English contact phone type labels
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactsLabelResolver;

impl ContactsLabelResolver {
    /// Stock label for a phone number type code
    pub fn type_label(number_type: i32) -> &'static str {
        match number_type {
            1 => "Home",
            2 => "Mobile",
            3 => "Work",
            4 => "Work Fax",
            5 => "Home Fax",
            6 => "Pager",
            7 => "Other",
            8 => "Callback",
            9 => "Car",
            10 => "Company Main",
            11 => "ISDN",
            12 => "Main",
            13 => "Other Fax",
            14 => "Radio",
            15 => "Telex",
            16 => "TTY TDD",
            17 => "Work Mobile",
            18 => "Work Pager",
            TYPE_ASSISTANT => "Assistant",
            20 => "MMS",
            _ => "Custom",
        }
    }
}

impl NumberLabelResolver for ContactsLabelResolver {
    fn label_for_call(
        &self,
        _number: Option<&str>,
        number_type: i32,
        custom_label: Option<&str>,
        plugin_name: Option<&str>,
    ) -> String {
        let custom_label = custom_label.filter(|l| !l.is_empty());

        if number_type == TYPE_CUSTOM {
            // An unlabelled custom number shows the plugin instead of "Custom".
            return custom_label
                .or_else(|| plugin_name.filter(|p| !p.is_empty()))
                .unwrap_or_default()
                .to_string();
        }

        match custom_label {
            Some(label) if number_type == TYPE_ASSISTANT => label.to_string(),
            _ => Self::type_label(number_type).to_string(),
        }
    }
}
