use rand::random;

use crate::header::Header;
use crate::query_type::QueryType;
use crate::question::Question;
use crate::record::Record;

#[derive(Default, Debug)]
pub struct Packet {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Record>,
    pub authorities: Vec<Record>,
    pub additionals: Vec<Record>,
}

impl Packet {
    pub fn new() -> Packet {
        Packet::default()
    }

    /// A fresh single-question query. Recursion desired stays unset, the
    /// servers this resolver talks to are authoritative.
    pub fn new_query(domain: &str, qtype: QueryType) -> Packet {
        let mut packet = Packet::new();

        packet.header = Header::new_with_id(random());
        packet.header.question_count = 1;
        packet.questions.push(Question::new(domain.to_string(), qtype));

        packet
    }
}
