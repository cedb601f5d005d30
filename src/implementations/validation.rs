use crate::config::ValidationRules;

impl ValidationRules {
    /// At most `username_max_len` characters and contains the separator
    pub fn accepts_username(&self, username: &str) -> bool {
        username.chars().count() <= self.username_max_len
            && username.contains(self.username_separator)
    }

    /// At least `password_min_len` characters with an uppercase ASCII letter,
    /// a digit and a special character; nothing outside ASCII letters, digits
    /// and the special set.
    pub fn accepts_password(&self, password: &str) -> bool {
        let is_special = |c: char| self.password_specials.contains(c);

        password.chars().count() >= self.password_min_len
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(is_special)
            && password.chars().all(|c| c.is_ascii_alphanumeric() || is_special(c))
    }

    pub fn accepts_description(&self, description: &str) -> bool {
        description.chars().count() <= self.description_max_len
    }
}

/// Username check under the default rules
pub fn is_valid_username(username: &str) -> bool {
    ValidationRules::default().accepts_username(username)
}

/// Password check under the default rules
pub fn is_valid_password(password: &str) -> bool {
    ValidationRules::default().accepts_password(password)
}

/// Description check under the default rules
pub fn is_valid_description(description: &str) -> bool {
    ValidationRules::default().accepts_description(description)
}
