use crate::models::personality::{GeneratedOption, TraitEffects};

const OPTION_MARKERS: &[&str] = &["Opción", "Option"];
const DEFAULT_EMOJI: &str = "❓";

/// Parses LLM output into exactly four ranked answer options.
///
/// The expected line format is
/// `Option [4]: text | Emoji: 🚀 | Effects: quantum_charisma=10, cosmic_luck=5`
/// but models drift, so every field degrades independently: a missing rank
/// becomes 1, a missing emoji becomes ❓, unparseable effects fall back to a
/// small default map, and a malformed line is skipped entirely. The result is
/// sorted by rank descending and padded or truncated to four entries.
pub fn parse_options(content: &str) -> Vec<GeneratedOption> {
    let mut options: Vec<GeneratedOption> = content
        .lines()
        .map(str::trim)
        .filter(|line| is_option_line(line))
        .filter_map(parse_option_line)
        .collect();

    options.sort_by(|a, b| b.value.cmp(&a.value));
    options.truncate(4);

    while options.len() < 4 {
        let missing_value = 4 - options.len() as i32;
        options.push(GeneratedOption {
            text: format!("Generic option {missing_value}"),
            emoji: Some(DEFAULT_EMOJI.to_string()),
            value: missing_value,
            effect: default_effects(),
            feedback: None,
        });
    }

    options
}

fn is_option_line(line: &str) -> bool {
    OPTION_MARKERS.iter().any(|m| line.starts_with(m))
}

fn parse_option_line(line: &str) -> Option<GeneratedOption> {
    let mut parts = line.split('|');

    let option_part = parts.next()?.trim();
    let emoji_part = parts.next().map(str::trim);
    let effects_part = parts.next().map(str::trim);

    let marker = OPTION_MARKERS.iter().find(|m| option_part.starts_with(**m))?;
    let after_marker = &option_part[marker.len()..];

    let (value, text) = split_rank_and_text(after_marker);

    let emoji = emoji_part
        .and_then(|part| part.split_once(':'))
        .map(|(_, e)| e.trim())
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_EMOJI)
        .to_string();

    let mut effect = effects_part
        .map(|part| match part.split_once(':') {
            Some((_, rest)) => parse_effect_pairs(rest),
            None => parse_effect_pairs(part),
        })
        .unwrap_or_default();
    if effect.is_empty() {
        effect = default_effects();
    }

    Some(GeneratedOption {
        text,
        emoji: Some(emoji),
        value,
        effect,
        feedback: None,
    })
}

/// Extracts the 1-4 rank and answer text from what follows the option marker,
/// e.g. ` [4]: Fly straight in` or ` 2: Wait and observe`.
fn split_rank_and_text(after_marker: &str) -> (i32, String) {
    let trimmed = after_marker.trim_start();

    if let Some(rest) = trimmed.strip_prefix('[') {
        if let Some(close) = rest.find(']') {
            if let Ok(value) = rest[..close].trim().parse::<i32>() {
                let tail = rest[close + 1..].trim_start_matches(':').trim();
                return (value, tail.to_string());
            }
        }
    }

    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value = digits.parse::<i32>().unwrap_or(1);

    let text = match trimmed.find(':') {
        Some(idx) => trimmed[idx + 1..].trim().to_string(),
        None => trimmed.to_string(),
    };

    (value, text)
}

/// Scans `key=value` pairs out of free-form text, tolerating stray separators
/// and whitespace around the `=`.
fn parse_effect_pairs(raw: &str) -> TraitEffects {
    let mut effects = TraitEffects::new();
    let bytes: Vec<char> = raw.chars().collect();
    let mut i = 0;

    while i < bytes.len() {
        if !(bytes[i].is_alphanumeric() || bytes[i] == '_') {
            i += 1;
            continue;
        }

        let key_start = i;
        while i < bytes.len() && (bytes[i].is_alphanumeric() || bytes[i] == '_') {
            i += 1;
        }
        let key: String = bytes[key_start..i].iter().collect();

        let mut j = i;
        while j < bytes.len() && bytes[j].is_whitespace() {
            j += 1;
        }
        if j >= bytes.len() || bytes[j] != '=' {
            continue;
        }
        j += 1;
        while j < bytes.len() && bytes[j].is_whitespace() {
            j += 1;
        }

        let value_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > value_start {
            let value: String = bytes[value_start..j].iter().collect();
            if let Ok(parsed) = value.parse::<i32>() {
                effects.insert(key, parsed);
            }
        }
        i = j;
    }

    effects
}

fn default_effects() -> TraitEffects {
    let mut effects = TraitEffects::new();
    effects.insert("quantum_charisma".to_string(), 5);
    effects.insert("absurdity_resistance".to_string(), 5);
    effects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_block() {
        let content = "\
Option [4]: Fly straight into the anomaly | Emoji: 🚀 | Effects: time_warping=12, cosmic_luck=8
Option [3]: Launch a probe | Emoji: 🛰️ | Effects: absurdity_resistance=8, quantum_charisma=5
Option [2]: Observe from afar | Emoji: 🔭 | Effects: absurdity_resistance=10, sarcasm_level=6
Option [1]: Report and retreat | Emoji: 📡 | Effects: absurdity_resistance=12, quantum_charisma=2";

        let options = parse_options(content);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].value, 4);
        assert_eq!(options[0].text, "Fly straight into the anomaly");
        assert_eq!(options[0].emoji.as_deref(), Some("🚀"));
        assert_eq!(options[0].effect["time_warping"], 12);
        assert_eq!(options[3].value, 1);
        assert_eq!(options[3].effect["quantum_charisma"], 2);
    }

    #[test]
    fn accepts_spanish_marker() {
        let content =
            "Opción [3]: Lanzar una sonda | Emoji: 🛰️ | Efectos: absurdity_resistance=8";
        let options = parse_options(content);
        assert_eq!(options[0].value, 3);
        assert_eq!(options[0].text, "Lanzar una sonda");
        assert_eq!(options[0].effect["absurdity_resistance"], 8);
    }

    #[test]
    fn rank_without_brackets_is_read_after_marker() {
        let content = "Option 2: Wait and observe | Emoji: 👁️ | Effects: sarcasm_level=7";
        let options = parse_options(content);
        assert_eq!(options[0].value, 2);
        assert_eq!(options[0].text, "Wait and observe");
    }

    #[test]
    fn missing_rank_defaults_to_one() {
        let content = "Option: Do something vague | Emoji: 🤷 | Effects: cosmic_luck=4";
        let options = parse_options(content);
        let parsed = options.iter().find(|o| o.text == "Do something vague");
        assert_eq!(parsed.map(|o| o.value), Some(1));
    }

    #[test]
    fn missing_emoji_segment_gets_placeholder() {
        let content = "Option [4]: Charge ahead";
        let options = parse_options(content);
        assert_eq!(options[0].emoji.as_deref(), Some("❓"));
    }

    #[test]
    fn unparseable_effects_get_default_map() {
        let content = "Option [4]: Charge ahead | Emoji: 🚀 | Effects: none of this parses";
        let options = parse_options(content);
        assert_eq!(options[0].effect["quantum_charisma"], 5);
        assert_eq!(options[0].effect["absurdity_resistance"], 5);
        assert_eq!(options[0].effect.len(), 2);
    }

    #[test]
    fn non_option_lines_are_ignored() {
        let content = "\
Here are your four options:
Option [4]: Bold move | Emoji: 🚀 | Effects: time_warping=9
Hope this helps!";
        let options = parse_options(content);
        assert_eq!(options[0].text, "Bold move");
        assert!(options.iter().all(|o| !o.text.contains("Hope")));
    }

    #[test]
    fn short_output_is_padded_to_four() {
        let content = "Option [4]: Only answer | Emoji: 🚀 | Effects: cosmic_luck=3";
        let options = parse_options(content);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].value, 4);
        assert_eq!(options[1].text, "Generic option 3");
        assert_eq!(options[2].text, "Generic option 2");
        assert_eq!(options[3].text, "Generic option 1");
        for filler in &options[1..] {
            assert_eq!(filler.effect["quantum_charisma"], 5);
        }
    }

    #[test]
    fn oversized_output_keeps_highest_ranked_four() {
        let content = "\
Option [5]: Too bold | Emoji: 🚀 | Effects: time_warping=9
Option [4]: Bold | Emoji: 🚀 | Effects: time_warping=9
Option [3]: Medium | Emoji: 🛰️ | Effects: cosmic_luck=5
Option [2]: Careful | Emoji: 🔭 | Effects: sarcasm_level=6
Option [1]: Retreat | Emoji: 📡 | Effects: quantum_charisma=2";
        let options = parse_options(content);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].value, 5);
        assert_eq!(options[3].value, 2);
    }

    #[test]
    fn empty_input_yields_four_generics() {
        let options = parse_options("");
        assert_eq!(options.len(), 4);
        let values: Vec<i32> = options.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![4, 3, 2, 1]);
    }
}
