use std::str::FromStr;

/// Case-insensitive lookup of a wire label onto a closed enum.
///
/// The service may introduce new labels before these bindings learn about
/// them, so a miss is reported to the caller as `None` rather than a fault;
/// it is also logged since it usually means the bindings are outdated.
/// `kind` names the enum being looked up, for the log line only.
pub fn mapping<T: FromStr>(kind: &str, value: &str) -> Option<T> {
    match T::from_str(value) {
        Ok(variant) => Some(variant),
        Err(_) => {
            tracing::warn!("unsupported {} value: {}", kind, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Eq, PartialEq)]
    enum Fruit {
        Apple,
    }
    impl FromStr for Fruit {
        type Err = ();
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.eq_ignore_ascii_case("apple") {
                true => Ok(Fruit::Apple),
                false => Err(()),
            }
        }
    }

    #[test]
    fn hit_and_miss() {
        assert_eq!(mapping::<Fruit>("fruit", "APPLE"), Some(Fruit::Apple));
        assert_eq!(mapping::<Fruit>("fruit", "pear"), None);
    }
}
