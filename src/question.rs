use crate::error::Result;
use crate::query_class::QueryClass;
use crate::query_type::QueryType;
use crate::writer::write_domain;

#[derive(Debug, Clone)]
pub struct Question {
    pub domain: String,
    pub qtype: QueryType,
    pub qclass: QueryClass,
}

impl Question {
    pub fn new(domain: String, qtype: QueryType) -> Question {
        Question {
            domain,
            qtype,
            qclass: QueryClass::IN,
        }
    }

    pub fn write(&self) -> Result<Vec<u8>> {
        let mut res = write_domain(&self.domain)?;

        res.extend_from_slice(&self.qtype.to_num().to_be_bytes());
        res.extend_from_slice(&self.qclass.to_num().to_be_bytes());

        Ok(res)
    }
}
