use crate::agents::Agent;

pub struct ValidationAgent;

impl Agent for ValidationAgent {
    fn name(&self) -> &str {
        "Decision-Validator"
    }

    fn system_prompt(&self) -> &str {
        r#"You are a Decision Reviewer AI. Check a proposed crypto trade decision for quality, internal logic and risk.
Answer ONLY with the tagged lines you are asked for, one per line, with no markdown."#
    }
}
