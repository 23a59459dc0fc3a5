//! Request framing for each orchestrator operation.
//!
//! These builders embed serialized universe state into the user-visible
//! turn text. Payloads are forwarded verbatim; nothing here assumes a
//! schema on `base_profile` or `generated_content`.

use serde_json::Value;

use crate::error::Result;
use crate::universe::Universe;

/// Framing for universe creation.
pub fn creation_request(base_profile: &Value, divergence_point: Option<&str>) -> Result<String> {
    let profile = serde_json::to_string_pretty(base_profile)?;
    let mut request = format!("Create a parallel universe for the following profile:\n{profile}");
    if let Some(divergence) = divergence_point {
        request.push_str(&format!("\nDivergence point: {divergence}"));
    }
    Ok(request)
}

/// Framing for open-ended elaboration on one universe.
pub fn exploration_request(universe: &Universe) -> Result<String> {
    Ok(format!(
        "Explore and provide detailed insights about this universe:\n{}",
        serde_json::to_string_pretty(universe)?
    ))
}

/// Framing for comparing two or more universes.
pub fn comparison_request(universes: &[Universe]) -> Result<String> {
    Ok(format!(
        "Compare these parallel universes and highlight key differences:\n{}",
        serde_json::to_string_pretty(universes)?
    ))
}

/// System framing that role-plays the universe's parallel self.
pub fn persona_framing(universe: &Universe) -> Result<String> {
    Ok(format!(
        "You are now embodying the parallel self from universe {}. Respond as \
         this version would, based on their experiences and personality:\n{}",
        universe.id,
        serde_json::to_string_pretty(universe)?
    ))
}

/// Framing for timeline generation.
pub fn timeline_request(universe: &Universe) -> Result<String> {
    Ok(format!(
        "Generate a detailed timeline for this parallel universe, showing key \
         events and how they differ from the base reality:\n{}",
        serde_json::to_string_pretty(universe)?
    ))
}

/// Framing for personality analysis.
pub fn personality_request(universe: &Universe) -> Result<String> {
    Ok(format!(
        "Analyze the personality of the parallel self in this universe and \
         how it diverges from the base profile:\n{}",
        serde_json::to_string_pretty(universe)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_creation_request_embeds_profile_and_divergence() {
        let profile = json!({"name": "Alex"});

        let without = creation_request(&profile, None).unwrap();
        assert!(without.contains("\"name\": \"Alex\""));
        assert!(!without.contains("Divergence point"));

        let with = creation_request(&profile, Some("took the job in Tokyo")).unwrap();
        assert!(with.contains("Divergence point: took the job in Tokyo"));
    }

    #[test]
    fn test_persona_framing_names_the_universe() {
        let universe = Universe {
            id: "u-42".to_string(),
            owner_id: "user-1".to_string(),
            base_profile: json!({}),
            divergence_point: None,
            generated_content: json!({}),
            created_at: chrono::Utc::now().to_rfc3339(),
            conversation_log: vec![],
        };

        let framing = persona_framing(&universe).unwrap();
        assert!(framing.contains("universe u-42"));
    }
}
