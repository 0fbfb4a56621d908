/// Three evenly spaced cpu samples for host `a`.
pub const CPU_RESPONSE: &str = r#"{"data":{"result":[{"metric":{"metric":"cpu","host":"a"},"dps":[["1000","1.0"],["1010","2.0"],["1020","3.0"]]}]}}"#;

pub const EMPTY_RESPONSE: &str = r#"{"data":{"result":[]}}"#;

/// Two series: a regular one and one holding a single sample.
pub const MIXED_RESPONSE: &str = r#"{"data":{"result":[
{"metric":{"metric":"mem.used","host":"b","dc":"east"},"dps":[[1500000000,"10"],[1500000060,"20"],[1500000120,"30"],[1500000180,"40"]]},
{"metric":{"metric":"disk.free"},"dps":[["1500000000.5","7.25"]]}
]}}"#;

/// Second series carries a sample value that is not a number.
pub const BAD_VALUE_RESPONSE: &str = r#"{"data":{"result":[
{"metric":{"metric":"cpu","host":"a"},"dps":[["1000","1.0"],["1010","2.0"]]},
{"metric":{"metric":"cpu","host":"b"},"dps":[["1000","1.0"],["1010","oops"]]}
]}}"#;

pub const MISSING_DPS_RESPONSE: &str = r#"{"data":{"result":[{"metric":{"metric":"cpu","host":"a"}}]}}"#;

pub const DESCRIPTORS_RESPONSE: &str = r#"["sys.cpu.user","sys.cpu.system","sys.mem.free"]"#;
