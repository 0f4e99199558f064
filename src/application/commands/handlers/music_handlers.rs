//! Music Command Handlers - 请求编排

use std::sync::Arc;

use crate::application::commands::GenerateMusicCommand;
use crate::application::error::ApplicationError;
use crate::application::ports::MusicGeneratorPort;
use crate::domain::{GenerationOutcome, GeneratorKind, PromptText};

/// GenerateMusic Handler
///
/// 校验输入，按名称选择生成器，并整理结果：
/// - 同步结果的标题改写为提示词第一个逗号段（生成器自身的标题被丢弃）
/// - 异步受理原样返回
pub struct GenerateMusicHandler {
    generators: Vec<Arc<dyn MusicGeneratorPort>>,
}

impl GenerateMusicHandler {
    pub fn new(generators: Vec<Arc<dyn MusicGeneratorPort>>) -> Self {
        Self { generators }
    }

    fn find_generator(&self, kind: GeneratorKind) -> Option<&Arc<dyn MusicGeneratorPort>> {
        self.generators.iter().find(|g| g.kind() == kind)
    }

    pub async fn handle(
        &self,
        cmd: GenerateMusicCommand,
    ) -> Result<GenerationOutcome, ApplicationError> {
        let prompt = PromptText::new(cmd.prompt)?;

        let kind = match cmd.generator.as_deref() {
            Some(name) => name.parse::<GeneratorKind>()?,
            None => GeneratorKind::default(),
        };

        let generator = self
            .find_generator(kind)
            .ok_or_else(|| ApplicationError::UnsupportedGenerator(kind.to_string()))?;

        tracing::info!(generator = %kind, prompt = %prompt, "Dispatching music generation");

        match generator.generate(&prompt).await? {
            GenerationOutcome::Complete(mut result) => {
                result.title = prompt.title();
                tracing::info!(
                    generator = %kind,
                    url = %result.url,
                    title = %result.title,
                    "Music generated"
                );
                Ok(GenerationOutcome::Complete(result))
            }
            GenerationOutcome::Pending(ack) => {
                tracing::info!(
                    generator = %kind,
                    task_id = %ack.task_id,
                    "Music generation accepted, awaiting callback"
                );
                Ok(GenerationOutcome::Pending(ack))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::GeneratorError;
    use crate::domain::{GenerationResult, PendingAck};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubGenerator {
        kind: GeneratorKind,
        calls: AtomicUsize,
    }

    impl StubGenerator {
        fn new(kind: GeneratorKind) -> Arc<Self> {
            Arc::new(Self {
                kind,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl MusicGeneratorPort for StubGenerator {
        fn kind(&self) -> GeneratorKind {
            self.kind
        }

        async fn generate(&self, prompt: &PromptText) -> Result<GenerationOutcome, GeneratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.kind {
                GeneratorKind::Local => Ok(GenerationOutcome::Complete(GenerationResult {
                    url: "http://localhost:8000/generated_audios/local/x.wav".into(),
                    title: "MusicGen Output".into(),
                    source: self.kind.source_label().into(),
                })),
                GeneratorKind::Cloud => Ok(GenerationOutcome::Pending(PendingAck {
                    title: prompt.title(),
                    source: self.kind.source_label().into(),
                    message: "pending".into(),
                    task_id: "task-1".into(),
                })),
            }
        }
    }

    fn command(prompt: &str, generator: Option<&str>) -> GenerateMusicCommand {
        GenerateMusicCommand {
            prompt: prompt.to_string(),
            generator: generator.map(str::to_string),
        }
    }

    fn handler_with(generators: Vec<Arc<StubGenerator>>) -> GenerateMusicHandler {
        GenerateMusicHandler::new(
            generators
                .into_iter()
                .map(|g| g as Arc<dyn MusicGeneratorPort>)
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_local_title_is_overridden_with_first_segment() {
        let handler = handler_with(vec![StubGenerator::new(GeneratorKind::Local)]);

        let outcome = handler
            .handle(command("tense, ambient cinematic, 70 BPM", Some("local")))
            .await
            .unwrap();

        match outcome {
            GenerationOutcome::Complete(result) => {
                assert_eq!(result.title, "tense");
                assert_eq!(result.source, "from MusicGen");
            }
            other => panic!("expected complete outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cloud_returns_pending_ack() {
        let handler = handler_with(vec![StubGenerator::new(GeneratorKind::Cloud)]);

        let outcome = handler
            .handle(command("bright, synthwave", Some("cloud")))
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            GenerationOutcome::Pending(ack) if ack.title == "bright" && ack.task_id == "task-1"
        ));
    }

    #[tokio::test]
    async fn test_missing_generator_defaults_to_cloud() {
        let cloud = StubGenerator::new(GeneratorKind::Cloud);
        let handler = handler_with(vec![StubGenerator::new(GeneratorKind::Local), cloud.clone()]);

        handler.handle(command("warm, jazz", None)).await.unwrap();
        assert_eq!(cloud.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unsupported_generator_rejected_before_dispatch() {
        let local = StubGenerator::new(GeneratorKind::Local);
        let handler = handler_with(vec![local.clone()]);

        let err = handler
            .handle(command("tense, ambient", Some("unsupported")))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::UnsupportedGenerator(_)));
        assert_eq!(local.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unregistered_generator_is_unsupported() {
        let handler = handler_with(vec![StubGenerator::new(GeneratorKind::Local)]);
        let err = handler
            .handle(command("tense", Some("cloud")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::UnsupportedGenerator(name) if name == "cloud"));
    }

    #[tokio::test]
    async fn test_empty_prompt_is_invalid_request() {
        let handler = handler_with(vec![StubGenerator::new(GeneratorKind::Local)]);
        let err = handler.handle(command("  ", Some("local"))).await.unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidRequest(_)));
    }
}
