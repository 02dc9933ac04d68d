use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub member_since: &'static str,
    pub day_streak: u32,
    pub routines_completed: u32,
    pub minutes_total: u32,
    pub favorite_category: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Morgan",
    email: "alex@welltune.app",
    member_since: "March 2024",
    day_streak: 12,
    routines_completed: 148,
    minutes_total: 2140,
    favorite_category: "Meditation",
};

/// First letters of the first two words of the display name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials(PROFILE.name), "AM");
        assert_eq!(initials("sam"), "S");
        assert_eq!(initials(""), "");
    }
}
