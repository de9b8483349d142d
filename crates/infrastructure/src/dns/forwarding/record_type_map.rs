use hickory_proto::rr::RecordType as HickoryRecordType;
use sieve_dns_domain::RecordType;

/// Conversion between the domain record type and hickory's.
///
/// Both sides carry the raw IANA code for types they do not name, so the
/// mapping is lossless in both directions.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Hickory RecordType → domain RecordType (for incoming queries)
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
