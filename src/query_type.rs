#[derive(Default, PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum QueryType {
    #[default]
    A, // 1
    NS, // 2
    CNAME, // 5
    Unknown(u16),
}

impl QueryType {
    pub fn from(value: u16) -> QueryType {
        match value {
            1 => QueryType::A,
            2 => QueryType::NS,
            5 => QueryType::CNAME,
            _ => QueryType::Unknown(value),
        }
    }

    pub fn to_num(&self) -> u16 {
        match *self {
            QueryType::A => 1,
            QueryType::NS => 2,
            QueryType::CNAME => 5,
            QueryType::Unknown(value) => value,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn type_codes() {
        assert_eq!(QueryType::from(1), QueryType::A);
        assert_eq!(QueryType::from(2), QueryType::NS);
        assert_eq!(QueryType::from(5), QueryType::CNAME);
        assert_eq!(QueryType::from(16), QueryType::Unknown(16));
        assert_eq!(QueryType::Unknown(16).to_num(), 16);
    }
}
