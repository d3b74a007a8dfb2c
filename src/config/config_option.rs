use crate::types::err::{self};

/// A configuration option, bounded by a minimum and maximum value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd + std::fmt::Display> ConfigOption<T> {
    /// Sets the value of the option, if `value` is within the bounds of the option.
    ///
    /// ```rust
    /// # use otter_coloring::config::ConfigOption;
    /// let mut option = ConfigOption { name: "luby", min: 1, max: 10, value: 4 };
    /// assert!(option.set(11).is_err());
    /// assert!(option.set(10).is_ok());
    /// assert_eq!(option.value, 10);
    /// ```
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        let (min, max) = self.min_max();
        match min <= value && value <= max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(err::ConfigError::OutOfBounds {
                name: self.name,
                min: min.to_string(),
                max: max.to_string(),
            }),
        }
    }
}
