//! Two-step recommendation flow.

use crate::error::GenerationError;
use crate::generator::TextGenerator;
use crate::prompts;
use crate::types::GrowingConditions;

/// Generated output: the crop list plus supplementary regional
/// context, both opaque markdown prose.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub crop_list: String,
    pub overview: String,
}

pub struct RecommendationEngine<G> {
    generator: G,
}

impl<G: TextGenerator> RecommendationEngine<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Run the two generation calls strictly in sequence.
    ///
    /// A failed crop-list call returns immediately and the overview
    /// call is never attempted; the overview is supplementary detail
    /// nested under the crop list. Neither call is retried.
    pub async fn recommend(
        &self,
        conditions: &GrowingConditions,
    ) -> Result<Recommendation, GenerationError> {
        tracing::info!(region = %conditions.region, "generating crop recommendations");

        let crop_list = self
            .generator
            .generate(&prompts::crop_list(conditions))
            .await?;

        let overview = self
            .generator
            .generate(&prompts::region_overview(&conditions.region))
            .await?;

        Ok(Recommendation {
            crop_list,
            overview,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use crate::types::SoilType;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Scripted generator: pops one prepared result per call and
    /// records every prompt it sees.
    #[derive(Clone, Default)]
    struct FakeGenerator {
        responses: Arc<Mutex<VecDeque<Result<String, GenerationError>>>>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl FakeGenerator {
        fn push_ok(&self, text: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(text.to_string()));
        }

        fn push_err(&self) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(GenerationError::Status(500)));
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GenerationError::MalformedResponse("script exhausted".to_string())))
        }
    }

    fn conditions() -> GrowingConditions {
        GrowingConditions {
            region: "Maharashtra".to_string(),
            avg_temp_c: 31.2,
            avg_rain_mm: 2.1,
            soil: SoilType::Loamy,
        }
    }

    #[tokio::test]
    async fn test_recommend_runs_both_calls_in_order() {
        let generator = FakeGenerator::default();
        generator.push_ok("the crops");
        generator.push_ok("the overview");

        let engine = RecommendationEngine::new(generator.clone());
        let rec = engine.recommend(&conditions()).await.unwrap();

        assert_eq!(rec.crop_list, "the crops");
        assert_eq!(rec.overview, "the overview");

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("most commonly grown crops"));
        assert!(prompts[1].contains("overview of agriculture"));
    }

    #[tokio::test]
    async fn test_crop_failure_skips_overview() {
        let generator = FakeGenerator::default();
        generator.push_err();

        let engine = RecommendationEngine::new(generator.clone());
        let result = engine.recommend(&conditions()).await;

        assert!(matches!(result, Err(GenerationError::Status(500))));
        // The overview call must never have been attempted.
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_prompt_carries_rounded_values() {
        let generator = FakeGenerator::default();
        generator.push_ok("crops");
        generator.push_ok("overview");

        let engine = RecommendationEngine::new(generator.clone());
        engine.recommend(&conditions()).await.unwrap();

        let first = &generator.prompts()[0];
        assert!(first.contains("31.2°C"));
        assert!(first.contains("2.1 mm/year"));
        assert!(first.contains("Maharashtra"));
        assert!(first.contains("Loamy"));
    }
}
