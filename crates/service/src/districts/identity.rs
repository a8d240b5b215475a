use chrono::Utc;
use rand::Rng;

/// Source of server-assigned district identity: the opaque id and the
/// display color. Behind a trait so tests can inject deterministic values.
pub trait IdentityGen: Send + Sync {
    fn district_id(&self) -> String;
    fn district_color(&self) -> String;
}

/// Production generator: time plus random entropy.
///
/// Ids are unique within a process lifetime with overwhelming probability;
/// there is no uniqueness check against existing entries. Colors are six
/// uniformly random hex digits with no contrast or distinctness guarantee.
pub struct RandomIdentityGen;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const HEX_UPPER: &[u8] = b"0123456789ABCDEF";

impl IdentityGen for RandomIdentityGen {
    fn district_id(&self) -> String {
        let millis = Utc::now().timestamp_millis();
        let mut rng = rand::thread_rng();
        let suffix: String =
            (0..9).map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char).collect();
        format!("district-{millis}-{suffix}")
    }

    fn district_color(&self) -> String {
        let mut rng = rand::thread_rng();
        let digits: String =
            (0..6).map(|_| HEX_UPPER[rng.gen_range(0..HEX_UPPER.len())] as char).collect();
        format!("#{digits}")
    }
}
