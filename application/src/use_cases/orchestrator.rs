//! Generation orchestrator use case.
//!
//! [`GenerationOrchestrator`] is the entry point the request-handling
//! layer calls. It sequences the three drafting flows — outline,
//! whole-document section generation, and single-section refinement —
//! building prompts from domain templates, invoking the model through the
//! tier-fallback [`ModelInvoker`], and shaping raw output with the domain
//! parsers.
//!
//! `generate_all_sections` is strictly sequential by design: each
//! section's prompt embeds a running summary of the sections generated
//! before it, so sections of one document are never generated
//! concurrently. Separate documents are independent and may run in
//! parallel with no shared state.

use crate::config::GenerationParams;
use crate::invoker::{ModelInvoker, REFINE_DISABLED_MESSAGE};
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use draftsmith_domain::{
    normalize_content, parse_outline, truncate_str, DocumentSpec, DomainError, GenerationContext,
    PromptTemplate, RefinementRecord, SectionSpec,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Orchestrates outline, section, and refinement generation.
///
/// Constructed once with its invoker (which carries the tier ladder and
/// the enabled/disabled decision) and injected wherever drafting is
/// needed — there is no global instance.
pub struct GenerationOrchestrator {
    invoker: ModelInvoker,
    logger: Arc<dyn GenerationLogger>,
}

impl GenerationOrchestrator {
    pub fn new(invoker: ModelInvoker) -> Self {
        Self {
            invoker,
            logger: Arc::new(NoGenerationLogger),
        }
    }

    /// Attach a structured event logger.
    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Generate an outline: up to `section_count` section titles.
    ///
    /// With a disabled invoker this returns `section_count` placeholder
    /// titles ("Section 1", ...). With an enabled invoker the parsed list
    /// may be shorter than requested — it is never padded here; the
    /// caller reconciles count mismatches.
    pub async fn generate_outline(&self, spec: &DocumentSpec, section_count: usize) -> Vec<String> {
        if !self.invoker.is_enabled() {
            return (1..=section_count).map(|i| format!("Section {}", i)).collect();
        }

        info!(
            "Generating outline: {} sections for '{}' ({})",
            section_count,
            truncate_str(&spec.main_topic, 80),
            spec.kind
        );

        let prompt = PromptTemplate::outline_prompt(&spec.main_topic, spec.kind, section_count);
        // Outlines run hotter and shorter than body content
        let params = GenerationParams::default()
            .with_temperature(0.8)
            .with_max_output_tokens(300);

        let raw = self
            .invoker
            .invoke(PromptTemplate::outline_system(), &prompt, &params)
            .await;
        let titles = parse_outline(&raw, section_count);

        self.logger.log(GenerationEvent::new(
            "outline_generated",
            serde_json::json!({
                "topic": spec.main_topic,
                "kind": spec.kind.as_str(),
                "requested": section_count,
                "returned": titles.len(),
            }),
        ));

        titles
    }

    /// Generate content for every section of a document, in ascending
    /// `order`, threading a running context forward so later sections can
    /// reference earlier ones.
    ///
    /// Returns the content keyed by section order. Fails only on an empty
    /// section list; backend problems surface as sentinel content strings
    /// the caller stores like any other content.
    pub async fn generate_all_sections(
        &self,
        spec: &DocumentSpec,
        sections: &[SectionSpec],
    ) -> Result<BTreeMap<u32, String>, DomainError> {
        if sections.is_empty() {
            return Err(DomainError::EmptyDocument);
        }

        info!(
            "Generating {} sections for '{}' ({})",
            sections.len(),
            truncate_str(&spec.main_topic, 80),
            spec.kind
        );

        let mut ordered: Vec<&SectionSpec> = sections.iter().collect();
        ordered.sort_by_key(|s| s.order);

        let mut context = GenerationContext::new();
        let mut contents = BTreeMap::new();

        for section in ordered {
            debug!("Generating section {} '{}'", section.order, section.title);

            let prompt = PromptTemplate::section_prompt(
                &spec.main_topic,
                &section.title,
                spec.kind,
                context.render(),
            );
            let raw = self
                .invoker
                .invoke(
                    PromptTemplate::section_system(),
                    &prompt,
                    &GenerationParams::default(),
                )
                .await;
            let content = normalize_content(&raw);

            self.logger.log(GenerationEvent::new(
                "section_generated",
                serde_json::json!({
                    "title": section.title,
                    "order": section.order,
                    "bytes": content.len(),
                }),
            ));

            context.push_section(&section.title, &content);
            contents.insert(section.order, content);
        }

        info!("Document generation complete: {} sections", contents.len());
        Ok(contents)
    }

    /// Refine one section's content according to a user instruction.
    ///
    /// Always returns a record: `previous_content` is preserved verbatim,
    /// and on a disabled invoker or exhausted tiers `new_content` carries
    /// the fixed sentinel string instead of refined text.
    pub async fn refine_section(
        &self,
        current_content: &str,
        instruction: &str,
        section_title: &str,
    ) -> RefinementRecord {
        if !self.invoker.is_enabled() {
            return RefinementRecord::new(instruction, current_content, REFINE_DISABLED_MESSAGE);
        }

        info!(
            "Refining section '{}': {}",
            section_title,
            truncate_str(instruction, 80)
        );

        let prompt = PromptTemplate::refine_prompt(section_title, current_content, instruction);
        let raw = self
            .invoker
            .invoke(
                PromptTemplate::refine_system(),
                &prompt,
                &GenerationParams::default(),
            )
            .await;
        let new_content = normalize_content(&raw);

        self.logger.log(GenerationEvent::new(
            "refinement_completed",
            serde_json::json!({
                "title": section_title,
                "instruction": instruction,
                "previous_bytes": current_content.len(),
                "new_bytes": new_content.len(),
            }),
        ));

        RefinementRecord::new(instruction, current_content, new_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoker::{DISABLED_MESSAGE, FAILURE_MESSAGE};
    use crate::ports::text_backend::{BackendError, CompletionRequest, TextBackend};
    use async_trait::async_trait;
    use draftsmith_domain::{DocumentKind, ModelTiers};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct ScriptedBackend {
        results: Mutex<VecDeque<Result<String, BackendError>>>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedBackend {
        fn new(results: Vec<Result<String, BackendError>>) -> Self {
            Self {
                results: Mutex::new(VecDeque::from(results)),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextBackend for ScriptedBackend {
        async fn complete(&self, request: CompletionRequest) -> Result<String, BackendError> {
            self.requests.lock().unwrap().push(request);
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(BackendError::Other("script exhausted".to_string())))
        }
    }

    fn orchestrator(backend: Arc<ScriptedBackend>) -> GenerationOrchestrator {
        GenerationOrchestrator::new(ModelInvoker::new(backend, ModelTiers::default()))
    }

    fn disabled_orchestrator() -> GenerationOrchestrator {
        GenerationOrchestrator::new(ModelInvoker::disabled(ModelTiers::default()))
    }

    fn report_spec() -> DocumentSpec {
        DocumentSpec::new("Electric vehicle batteries", DocumentKind::Report)
    }

    // ==================== Outline ====================

    #[tokio::test]
    async fn test_outline_disabled_pads_with_placeholders() {
        let orch = disabled_orchestrator();
        let titles = orch.generate_outline(&report_spec(), 5).await;
        assert_eq!(
            titles,
            vec!["Section 1", "Section 2", "Section 3", "Section 4", "Section 5"]
        );
    }

    #[tokio::test]
    async fn test_outline_parses_and_truncates() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(
            "1. Intro\n2. Market\n3. Tech\n4. Risks\n5. Outlook\n6. Extra".to_string(),
        )]));
        let orch = orchestrator(backend.clone());

        let titles = orch.generate_outline(&report_spec(), 5).await;

        assert_eq!(titles, vec!["Intro", "Market", "Tech", "Risks", "Outlook"]);
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_outline_short_result_not_padded() {
        // Enabled path never pads — asymmetric with the disabled path on purpose
        let backend = Arc::new(ScriptedBackend::new(vec![Ok("Only\nTwo".to_string())]));
        let orch = orchestrator(backend);

        let titles = orch.generate_outline(&report_spec(), 5).await;
        assert_eq!(titles, vec!["Only", "Two"]);
    }

    #[tokio::test]
    async fn test_outline_uses_hotter_shorter_params() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok("A\nB\nC".to_string())]));
        let orch = orchestrator(backend.clone());

        orch.generate_outline(&report_spec(), 3).await;

        let request = &backend.requests()[0];
        assert_eq!(request.temperature, 0.8);
        assert_eq!(request.max_output_tokens, 300);
        assert!(request.user.contains("3 document section titles"));
    }

    // ==================== Sections ====================

    #[tokio::test]
    async fn test_empty_section_list_is_hard_error_and_no_calls() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let orch = orchestrator(backend.clone());

        let result = orch.generate_all_sections(&report_spec(), &[]).await;

        assert!(matches!(result, Err(DomainError::EmptyDocument)));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_sections_processed_in_ascending_order() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Ok("content zero".to_string()),
            Ok("content one".to_string()),
            Ok("content two".to_string()),
        ]));
        let orch = orchestrator(backend.clone());

        // Deliberately out of order
        let sections = vec![
            SectionSpec::new("Gamma", 2),
            SectionSpec::new("Alpha", 0),
            SectionSpec::new("Beta", 1),
        ];
        let contents = orch
            .generate_all_sections(&report_spec(), &sections)
            .await
            .unwrap();

        let requests = backend.requests();
        assert!(requests[0].user.contains("Section: Alpha"));
        assert!(requests[1].user.contains("Section: Beta"));
        assert!(requests[2].user.contains("Section: Gamma"));

        assert_eq!(contents[&0], "content zero");
        assert_eq!(contents[&1], "content one");
        assert_eq!(contents[&2], "content two");
    }

    #[tokio::test]
    async fn test_context_threads_forward() {
        let long_first = "a".repeat(300);
        let backend = Arc::new(ScriptedBackend::new(vec![
            Ok(long_first.clone()),
            Ok("second".to_string()),
        ]));
        let orch = orchestrator(backend.clone());

        let sections = vec![
            SectionSpec::new("Opening", 0),
            SectionSpec::new("Closing", 1),
        ];
        orch.generate_all_sections(&report_spec(), &sections)
            .await
            .unwrap();

        let requests = backend.requests();
        // First section sees no context at all
        assert!(!requests[0].user.contains("Context:"));
        // Second section sees the first 200 chars of the first, plus marker
        let expected_fragment = format!("Opening: {}...", "a".repeat(200));
        assert!(requests[1].user.contains(&expected_fragment));
        assert!(!requests[1].user.contains(&"a".repeat(201)));
    }

    #[tokio::test]
    async fn test_exhausted_tiers_store_sentinel_as_content() {
        // Both tiers fail for the single section: visible failure content
        let backend = Arc::new(ScriptedBackend::new(vec![
            Err(BackendError::Connection("down".to_string())),
            Err(BackendError::Connection("down".to_string())),
        ]));
        let orch = orchestrator(backend);

        let sections = vec![SectionSpec::new("Only", 0)];
        let contents = orch
            .generate_all_sections(&report_spec(), &sections)
            .await
            .unwrap();

        assert_eq!(contents[&0], FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_noncontiguous_orders_preserved_as_keys() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Ok("ten".to_string()),
            Ok("forty".to_string()),
        ]));
        let orch = orchestrator(backend);

        let sections = vec![SectionSpec::new("B", 40), SectionSpec::new("A", 10)];
        let contents = orch
            .generate_all_sections(&report_spec(), &sections)
            .await
            .unwrap();

        assert_eq!(contents.keys().copied().collect::<Vec<_>>(), vec![10, 40]);
        assert_eq!(contents[&10], "ten");
        assert_eq!(contents[&40], "forty");
    }

    // ==================== Refinement ====================

    #[tokio::test]
    async fn test_refine_returns_before_and_after() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(
            "  Tighter text.  ".to_string()
        )]));
        let orch = orchestrator(backend.clone());

        let record = orch
            .refine_section("Original text.", "shorten", "Intro")
            .await;

        assert_eq!(record.previous_content, "Original text.");
        assert_eq!(record.new_content, "Tighter text.");
        assert_eq!(record.prompt, "shorten");
        assert!(record.liked.is_none());

        let request = &backend.requests()[0];
        assert!(request.user.contains("Original text."));
        assert!(request.user.contains("Request: shorten"));
    }

    #[tokio::test]
    async fn test_refine_disabled_preserves_previous_content() {
        let orch = disabled_orchestrator();

        let record = orch.refine_section("X", "shorten", "T").await;

        assert_eq!(record.previous_content, "X");
        assert_eq!(record.new_content, REFINE_DISABLED_MESSAGE);
        // The refine flow has its own sentinel, not the generic one
        assert_ne!(record.new_content, DISABLED_MESSAGE);
        assert!(record.new_content.contains("refinement"));
    }
}
