use crate::agents::Agent;

pub struct RiskAgent;

impl Agent for RiskAgent {
    fn name(&self) -> &str {
        "Risk-Assessor"
    }

    fn system_prompt(&self) -> &str {
        r#"You are a Risk Manager AI for cryptocurrency positions.
Weigh the technical indicators against the investor's risk tolerance and horizon.
Be conservative: when signals conflict, rate the risk higher.
Answer ONLY with the tagged lines you are asked for, one per line, with no markdown."#
    }
}
