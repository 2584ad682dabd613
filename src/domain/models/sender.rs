use std::fmt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sender::User => return write!(f, "{}", Config::get(ConfigKey::Username)),
            Sender::Assistant => return write!(f, "Assistant"),
        }
    }
}
