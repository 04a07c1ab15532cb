use crate::types::err::{self};

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

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is between the min and max of the option (inclusive).
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if self.min <= value && value <= self.max {
            self.value = value;
            Ok(())
        } else {
            Err(err::ConfigError::OutOfBounds(self.name))
        }
    }
}
