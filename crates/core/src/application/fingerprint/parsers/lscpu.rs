// lscpu output parser

use super::value_after_colon;

/// CPU facts found in `lscpu` output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuFacts {
    pub model: Option<String>,
    /// Formatted as "<mhz> MHz", zero decimals
    pub clock: Option<String>,
    pub l1d: Option<String>,
    pub l1i: Option<String>,
    pub l2: Option<String>,
    pub l3: Option<String>,
}

/// Parse `lscpu` text. The first matching line wins for each field.
pub fn parse(output: &str) -> CpuFacts {
    let mut facts = CpuFacts::default();

    for line in output.lines() {
        let Some(value) = value_after_colon(line) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        let slot = if line.contains("Model name:") {
            &mut facts.model
        } else if line.contains("CPU MHz:") {
            // A non-numeric clock drops only this fact
            if facts.clock.is_none() {
                facts.clock = value
                    .parse::<f64>()
                    .ok()
                    .map(|mhz| format!("{:.0} MHz", mhz));
            }
            continue;
        } else if line.contains("L1d cache:") {
            &mut facts.l1d
        } else if line.contains("L1i cache:") {
            &mut facts.l1i
        } else if line.contains("L2 cache:") {
            &mut facts.l2
        } else if line.contains("L3 cache:") {
            &mut facts.l3
        } else {
            continue;
        };

        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    facts
}
