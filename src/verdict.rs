use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum Verdict {
    #[serde(rename = "OK")]
    #[strum(serialize = "OK")]
    Ok,
    Failed,
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

/// A format failure always wins: the checksum result is ignored when the
/// format check did not pass.
pub fn to_verdict(format_ok: bool, checksum_ok: bool) -> Verdict {
    if format_ok && checksum_ok {
        Verdict::Ok
    } else {
        Verdict::Failed
    }
}
