use strum::{Display, EnumIter, EnumString};

/// How pressing a request is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_round_trip() {
        assert_eq!(Ok(Urgency::Low), "low".parse());
        assert_eq!(Ok(Urgency::Medium), "medium".parse());
        assert_eq!(Ok(Urgency::High), "high".parse());
        assert_eq!("high", Urgency::High.to_string());
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(Urgency::Medium, Urgency::default());
    }
}
