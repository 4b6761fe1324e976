#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum QueryClass {
    #[default]
    IN, // 1
    Unknown(u16),
}

impl QueryClass {
    pub fn from(value: u16) -> QueryClass {
        match value {
            1 => QueryClass::IN,
            _ => QueryClass::Unknown(value),
        }
    }

    pub fn to_num(&self) -> u16 {
        match *self {
            QueryClass::IN => 1,
            QueryClass::Unknown(value) => value,
        }
    }
}
