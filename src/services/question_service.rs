use crate::error::Result;
use crate::models::personality::{GeneratedQuestion, Lang};
use crate::services::simple_generator::SimpleQuestionGenerator;
use async_trait::async_trait;
use std::sync::Arc;

const THEMES_EN: &[&str] = &[
    "space travel",
    "alien encounter",
    "time paradox",
    "space colonization",
];

const THEMES_ES: &[&str] = &[
    "viaje espacial",
    "encuentro alienígena",
    "paradoja temporal",
    "colonización espacial",
];

pub fn themes_for(lang: Lang) -> &'static [&'static str] {
    match lang {
        Lang::En => THEMES_EN,
        Lang::Es => THEMES_ES,
    }
}

/// One tier of the question generation chain. Implementations must emit the
/// same output shape so callers cannot tell which tier answered.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, theme: &str, lang: Lang) -> Result<GeneratedQuestion>;
}

/// Orchestrates the tiered generation chain behind the quiz endpoint.
///
/// With on-demand generation enabled, each theme walks the tier list in order
/// until one succeeds; themes where every tier fails are dropped rather than
/// substituted, and only a fully failed batch falls back to the curated
/// generator for all themes. With the flag off, the curated generator serves
/// every theme directly. Either way the response carries exactly one entry per
/// theme, padded from the deterministic template when slots were dropped.
pub struct QuestionService {
    tiers: Vec<Arc<dyn QuestionGenerator>>,
    simple: Arc<SimpleQuestionGenerator>,
    on_demand: bool,
}

impl QuestionService {
    pub fn new(
        tiers: Vec<Arc<dyn QuestionGenerator>>,
        simple: Arc<SimpleQuestionGenerator>,
        on_demand: bool,
    ) -> Self {
        Self {
            tiers,
            simple,
            on_demand,
        }
    }

    pub async fn questions(&self, lang: Lang) -> Vec<GeneratedQuestion> {
        let themes = themes_for(lang);

        let mut questions = if self.on_demand {
            self.generate_on_demand(themes, lang).await
        } else {
            Vec::new()
        };

        if questions.is_empty() {
            for theme in themes {
                questions.push(self.simple.question_for(theme, lang));
            }
        }

        // Pad from the deterministic template, cycling themes.
        let mut pad_index = 0usize;
        while questions.len() < themes.len() {
            let theme = themes[pad_index % themes.len()];
            questions.push(self.simple.fallback_question(theme, lang));
            pad_index += 1;
        }

        questions
    }

    async fn generate_on_demand(&self, themes: &[&str], lang: Lang) -> Vec<GeneratedQuestion> {
        let mut questions = Vec::with_capacity(themes.len());

        for theme in themes {
            match self.generate_one(theme, lang).await {
                Some(question) => questions.push(question),
                None => {
                    tracing::warn!("All generation tiers failed for theme {theme}, dropping slot")
                }
            }
        }

        questions
    }

    async fn generate_one(&self, theme: &str, lang: Lang) -> Option<GeneratedQuestion> {
        for tier in &self.tiers {
            match tier.generate(theme, lang).await {
                Ok(question) => {
                    tracing::debug!("Tier {} generated question for {theme}", tier.name());
                    return Some(question);
                }
                Err(e) => {
                    tracing::warn!("Tier {} failed for theme {theme}: {:?}", tier.name(), e);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const BASE: &str = "http://localhost:8000";

    struct FailingGenerator;

    #[async_trait]
    impl QuestionGenerator for FailingGenerator {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn generate(&self, _theme: &str, _lang: Lang) -> Result<GeneratedQuestion> {
            Err(Error::Internal("boom".to_string()))
        }
    }

    /// Fails for one specific theme, defers to the curated generator for the
    /// rest.
    struct PartialGenerator {
        failing_theme: &'static str,
        inner: SimpleQuestionGenerator,
    }

    #[async_trait]
    impl QuestionGenerator for PartialGenerator {
        fn name(&self) -> &'static str {
            "partial"
        }

        async fn generate(&self, theme: &str, lang: Lang) -> Result<GeneratedQuestion> {
            if theme == self.failing_theme {
                return Err(Error::Internal("boom".to_string()));
            }
            Ok(self.inner.question_for(theme, lang))
        }
    }

    fn simple() -> Arc<SimpleQuestionGenerator> {
        Arc::new(SimpleQuestionGenerator::with_seed(BASE, 1))
    }

    #[tokio::test]
    async fn flag_off_serves_four_curated_questions() {
        let service = QuestionService::new(vec![], simple(), false);
        let questions = service.questions(Lang::En).await;
        assert_eq!(questions.len(), 4);
        for question in &questions {
            assert_eq!(question.options.len(), 4);
            assert!(!question.question.starts_with("Fallback question"));
        }
    }

    #[tokio::test]
    async fn on_demand_with_all_tiers_down_falls_back_for_every_theme() {
        let service = QuestionService::new(vec![Arc::new(FailingGenerator)], simple(), true);
        let questions = service.questions(Lang::En).await;
        assert_eq!(questions.len(), 4);
    }

    #[tokio::test]
    async fn on_demand_partial_failure_pads_back_to_four() {
        let partial = PartialGenerator {
            failing_theme: "time paradox",
            inner: SimpleQuestionGenerator::with_seed(BASE, 2),
        };
        let service = QuestionService::new(vec![Arc::new(partial)], simple(), true);
        let questions = service.questions(Lang::En).await;

        // Three tier successes plus one template pad.
        assert_eq!(questions.len(), 4);
        assert_eq!(
            questions
                .iter()
                .filter(|q| q.question.starts_with("Fallback question"))
                .count(),
            1
        );
    }

    // A theme the tier list cannot answer drops its slot; the gap is filled
    // from the deterministic template, never by a curated catalog entry for
    // that theme.
    #[tokio::test]
    async fn on_demand_failed_theme_is_not_substituted_with_curated() {
        let partial = PartialGenerator {
            failing_theme: "alien encounter",
            inner: SimpleQuestionGenerator::with_seed(BASE, 3),
        };
        let fallback = simple();
        let service = QuestionService::new(vec![Arc::new(partial)], fallback.clone(), true);
        let questions = service.questions(Lang::En).await;

        assert_eq!(questions.len(), 4);
        let alien_catalog = fallback.catalog(Lang::En)["alien encounter"].clone();
        assert!(questions.iter().all(|q| !alien_catalog.contains(q)));
        assert_eq!(
            questions
                .iter()
                .filter(|q| q.question.starts_with("Fallback question"))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn spanish_questions_come_from_spanish_catalog() {
        let service = QuestionService::new(vec![], simple(), false);
        let questions = service.questions(Lang::Es).await;
        let probe = SimpleQuestionGenerator::with_seed(BASE, 9);
        let catalog = probe.catalog(Lang::Es);
        for question in &questions {
            assert!(catalog
                .values()
                .any(|entries| entries.contains(question)));
        }
    }
}
