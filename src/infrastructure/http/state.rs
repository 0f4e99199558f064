//! Application State

use std::sync::Arc;

use crate::application::{
    ArtifactStorePort, GenerateMusicHandler, LlmClientPort, MusicGeneratorPort,
    StoreCallbackAudioHandler, TransformPromptHandler,
};
use crate::domain::GeneratorKind;

/// 应用状态
///
/// 请求之间不共享可变状态，只持有无状态的处理器
pub struct AppState {
    pub generator_kinds: Vec<GeneratorKind>,

    pub transform_prompt_handler: TransformPromptHandler,
    pub generate_music_handler: GenerateMusicHandler,
    pub store_callback_handler: StoreCallbackAudioHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        llm_client: Arc<dyn LlmClientPort>,
        generators: Vec<Arc<dyn MusicGeneratorPort>>,
        artifact_store: Arc<dyn ArtifactStorePort>,
    ) -> Self {
        Self {
            generator_kinds: generators.iter().map(|g| g.kind()).collect(),
            transform_prompt_handler: TransformPromptHandler::new(llm_client),
            generate_music_handler: GenerateMusicHandler::new(generators),
            store_callback_handler: StoreCallbackAudioHandler::new(artifact_store),
        }
    }
}
