use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Bot,
    Luch,
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => return String::from("You"),
            Author::Bot => return String::from("Bot"),
            Author::Luch => return String::from("Luch"),
        }
    }
}
