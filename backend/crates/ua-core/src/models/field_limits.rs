/// Maximum accepted lengths (in characters) for user fields.
///
/// Defaults match the `VARCHAR(80)` columns of the `users` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub max_name_length: usize,
    pub max_email_length: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_name_length: 80,
            max_email_length: 80,
        }
    }
}
