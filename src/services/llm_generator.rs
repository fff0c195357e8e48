use crate::error::Result;
use crate::models::personality::{GeneratedOption, GeneratedQuestion, Lang};
use crate::services::chat_model::ChatModel;
use crate::services::image_service::ImageService;
use crate::services::option_parser::parse_options;
use crate::services::question_service::QuestionGenerator;
use async_trait::async_trait;
use std::sync::Arc;

const MAX_FEEDBACK_WORDS: usize = 15;

/// First-tier generator: a four-stage chain (question, image, options,
/// feedback) driven by a chat model. The question stage is the only one that
/// can fail the whole generator; downstream stages degrade to placeholders so
/// one bad completion never wastes a good scenario.
pub struct LlmQuestionGenerator {
    model: Arc<dyn ChatModel>,
    images: ImageService,
}

impl LlmQuestionGenerator {
    pub fn new(model: Arc<dyn ChatModel>, images: ImageService) -> Self {
        Self { model, images }
    }

    async fn question_stage(&self, theme: &str, lang: Lang) -> Result<(String, String)> {
        let prompt = match lang {
            Lang::En => format!(
                "Generate a cosmic science fiction personality question about {theme}.\n\
                 The question must present a dilemma or difficult situation where the user \
                 chooses between multiple options.\n\
                 Also generate a detailed scenario description in 3-4 sentences.\n\n\
                 Format:\n\
                 Question: [question]\n\
                 Scenario: [detailed description]"
            ),
            Lang::Es => format!(
                "Genera una pregunta de personalidad de ciencia ficción cósmica sobre {theme}.\n\
                 La pregunta debe presentar un dilema o situación difícil donde el usuario \
                 debe elegir entre múltiples opciones.\n\
                 También genera una descripción detallada del escenario en 3-4 oraciones.\n\n\
                 Formato:\n\
                 Pregunta: [pregunta]\n\
                 Escenario: [descripción detallada]"
            ),
        };

        let content = self.model.complete(&prompt, 0.8).await?;

        let mut question = String::new();
        let mut scenario = String::new();
        for line in content.lines() {
            let line = line.trim();
            for marker in ["Question:", "Pregunta:"] {
                if let Some(rest) = line.strip_prefix(marker) {
                    question = rest.trim().to_string();
                }
            }
            for marker in ["Scenario:", "Escenario:"] {
                if let Some(rest) = line.strip_prefix(marker) {
                    scenario = rest.trim().to_string();
                }
            }
        }

        if question.is_empty() {
            return Err(anyhow::anyhow!("Model returned no question line").into());
        }
        Ok((question, scenario))
    }

    async fn options_stage(
        &self,
        question: &str,
        scenario: &str,
        lang: Lang,
    ) -> Vec<GeneratedOption> {
        let prompt = match lang {
            Lang::En => format!(
                "For the question: {question}\n\
                 In the scenario: {scenario}\n\n\
                 Generate exactly 4 possible answers ordered from the boldest/riskiest (4) \
                 down to the most cautious/conservative (1).\n\n\
                 For each answer include:\n\
                 1. The answer text (1 sentence)\n\
                 2. An appropriate emoji\n\
                 3. A numeric value (4=riskiest, 1=most conservative)\n\
                 4. Effects on the personality statistics:\n\
                    - quantum_charisma (0-15)\n\
                    - absurdity_resistance (0-15)\n\
                    - sarcasm_level (0-15)\n\
                    - time_warping (0-18)\n\
                    - cosmic_luck (0-10)\n\
                    Each option must affect 2-3 distinct statistics.\n\n\
                 Format for each option:\n\
                 Option [value]: [text] | Emoji: [emoji] | Effects: quantum_charisma=[value], absurdity_resistance=[value], etc."
            ),
            Lang::Es => format!(
                "Para la pregunta: {question}\n\
                 En el escenario: {scenario}\n\n\
                 Genera exactamente 4 posibles respuestas ordenadas desde la más valiente/arriesgada (4) \
                 hasta la más cautelosa/conservadora (1).\n\n\
                 Para cada respuesta incluye:\n\
                 1. Texto de la respuesta (1 frase)\n\
                 2. Un emoji apropiado\n\
                 3. Valor numérico (4=más arriesgada, 1=más conservadora)\n\
                 4. Efectos en las estadísticas de personalidad:\n\
                    - quantum_charisma (0-15)\n\
                    - absurdity_resistance (0-15)\n\
                    - sarcasm_level (0-15)\n\
                    - time_warping (0-18)\n\
                    - cosmic_luck (0-10)\n\
                    Cada opción debe afectar 2-3 estadísticas distintas.\n\n\
                 Formato para cada opción:\n\
                 Opción [valor]: [texto] | Emoji: [emoji] | Efectos: quantum_charisma=[valor], absurdity_resistance=[valor], etc."
            ),
        };

        match self.model.complete(&prompt, 0.7).await {
            Ok(content) => parse_options(&content),
            Err(e) => {
                tracing::warn!("Options stage failed, padding with generics: {:?}", e);
                parse_options("")
            }
        }
    }

    async fn feedback_stage(&self, options: &mut [GeneratedOption], lang: Lang) {
        for option in options.iter_mut() {
            let effects = serde_json::to_string(&option.effect).unwrap_or_default();
            let prompt = match lang {
                Lang::En => format!(
                    "For the answer: \"{}\" (value: {})\n\
                     With effects: {}\n\n\
                     Generate a brief, insightful feedback line (at most 15 words) shown to the \
                     user after choosing this option.\n\
                     The tone should be lightly humorous and cosmic, with a philosophical touch.",
                    option.text, option.value, effects
                ),
                Lang::Es => format!(
                    "Para la respuesta: \"{}\" (valor: {})\n\
                     Con efectos: {}\n\n\
                     Genera un feedback breve y perspicaz (máximo 15 palabras) que se mostrará \
                     al usuario después de elegir esta opción.\n\
                     El tono debe ser ligeramente humorístico y cósmico, con un toque filosófico.",
                    option.text, option.value, effects
                ),
            };

            let feedback = match self.model.complete(&prompt, 0.7).await {
                Ok(raw) => truncate_words(raw.trim(), MAX_FEEDBACK_WORDS),
                Err(e) => {
                    tracing::warn!("Feedback stage failed for one option: {:?}", e);
                    generic_feedback(lang)
                }
            };
            option.feedback = Some(feedback);
        }
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn generate(&self, theme: &str, lang: Lang) -> Result<GeneratedQuestion> {
        let (question, scenario) = self.question_stage(theme, lang).await?;
        let context_image = self.images.generate_context_image(&scenario).await;
        let mut options = self.options_stage(&question, &scenario, lang).await;
        self.feedback_stage(&mut options, lang).await;

        Ok(GeneratedQuestion {
            question,
            scenario_description: scenario,
            context_image,
            options,
        })
    }
}

fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max_words {
        words[..max_words].join(" ")
    } else {
        text.to_string()
    }
}

fn generic_feedback(lang: Lang) -> String {
    match lang {
        Lang::En => "An interesting choice for a cosmic traveler.".to_string(),
        Lang::Es => "Una elección interesante para un viajero cósmico.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::chat_model::MockChatModel;

    fn disabled_images() -> ImageService {
        ImageService::new(
            None,
            reqwest::Client::new(),
            false,
            "static".to_string(),
            "http://localhost:8000".to_string(),
            std::time::Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn full_chain_produces_four_options_with_feedback() {
        let mut model = MockChatModel::new();
        let mut call = 0usize;
        model.expect_complete().returning(move |_, _| {
            call += 1;
            let out = match call {
                1 => "Question: What do you do at the anomaly?\nScenario: A rift opens."
                    .to_string(),
                2 => "\
Option [4]: Fly in | Emoji: 🚀 | Effects: time_warping=12
Option [3]: Probe it | Emoji: 🛰️ | Effects: absurdity_resistance=8
Option [2]: Watch it | Emoji: 🔭 | Effects: sarcasm_level=6
Option [1]: Flee | Emoji: 📡 | Effects: quantum_charisma=2"
                    .to_string(),
                _ => "Bold. The rift approves.".to_string(),
            };
            Ok(out)
        });

        let generator = LlmQuestionGenerator::new(Arc::new(model), disabled_images());
        let question = generator.generate("space travel", Lang::En).await.unwrap();

        assert_eq!(question.question, "What do you do at the anomaly?");
        assert_eq!(question.scenario_description, "A rift opens.");
        assert!(question.context_image.ends_with("cosmic_default.webp"));
        assert_eq!(question.options.len(), 4);
        assert!(question
            .options
            .iter()
            .all(|o| o.feedback.as_deref() == Some("Bold. The rift approves.")));
    }

    #[tokio::test]
    async fn missing_question_line_fails_the_generator() {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .returning(|_, _| Ok("I refuse to follow formats.".to_string()));

        let generator = LlmQuestionGenerator::new(Arc::new(model), disabled_images());
        assert!(generator.generate("space travel", Lang::En).await.is_err());
    }

    #[tokio::test]
    async fn failed_feedback_falls_back_per_option() {
        let mut model = MockChatModel::new();
        let mut call = 0usize;
        model.expect_complete().returning(move |_, _| {
            call += 1;
            match call {
                1 => Ok("Question: Q?\nScenario: S.".to_string()),
                2 => Ok("Option [4]: Go | Emoji: 🚀 | Effects: cosmic_luck=3".to_string()),
                _ => Err(anyhow::anyhow!("model down").into()),
            }
        });

        let generator = LlmQuestionGenerator::new(Arc::new(model), disabled_images());
        let question = generator.generate("space travel", Lang::En).await.unwrap();
        assert_eq!(question.options.len(), 4);
        assert!(question
            .options
            .iter()
            .all(|o| o.feedback.as_deref() == Some("An interesting choice for a cosmic traveler.")));
    }

    #[tokio::test]
    async fn long_feedback_is_capped_at_fifteen_words() {
        let mut model = MockChatModel::new();
        let mut call = 0usize;
        model.expect_complete().returning(move |_, _| {
            call += 1;
            let out = match call {
                1 => "Question: Q?\nScenario: S.".to_string(),
                2 => "Option [4]: Go | Emoji: 🚀 | Effects: cosmic_luck=3".to_string(),
                _ => "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen seventeen".to_string(),
            };
            Ok(out)
        });

        let generator = LlmQuestionGenerator::new(Arc::new(model), disabled_images());
        let question = generator.generate("space travel", Lang::En).await.unwrap();
        let feedback = question.options[0].feedback.clone().unwrap();
        assert_eq!(feedback.split_whitespace().count(), 15);
        assert!(feedback.ends_with("fifteen"));
    }
}
