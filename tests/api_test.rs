//! API integration tests
//!
//! The full router runs against wiremock upstreams (LLM, MusicGen, Suno)
//! and a temporary artifact directory.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use base64::{engine::general_purpose::STANDARD, Engine};
use secrecy::SecretString;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use metatune::application::{ArtifactStorePort, MusicGeneratorPort};
use metatune::infrastructure::http::{AppState, HttpServer, ServerConfig};
use metatune::infrastructure::{
    FileArtifactStore, MusicGenClient, MusicGenClientConfig, OllamaClient, OllamaClientConfig,
    SunoClient, SunoClientConfig,
};

const MOUNT_PATH: &str = "/generated_audios";

struct TestApp {
    router: Router,
    root: PathBuf,
    llm: MockServer,
    musicgen: MockServer,
    suno: MockServer,
    _dir: TempDir,
}

impl TestApp {
    async fn spawn(suno_api_key: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("generated_audios");

        let llm = MockServer::start().await;
        let musicgen = MockServer::start().await;
        let suno = MockServer::start().await;

        let artifact_store: Arc<dyn ArtifactStorePort> =
            Arc::new(FileArtifactStore::new(&root, MOUNT_PATH).await.unwrap());

        let llm_client = Arc::new(
            OllamaClient::new(OllamaClientConfig::new(llm.uri()).with_timeout(5)).unwrap(),
        );
        let musicgen_client = MusicGenClient::new(
            MusicGenClientConfig::new(musicgen.uri()).with_timeout(5),
            artifact_store.clone(),
        )
        .unwrap();
        let suno_client = SunoClient::new(SunoClientConfig {
            base_url: suno.uri(),
            api_key: suno_api_key.map(|k| SecretString::from(k.to_string())),
            timeout_secs: 5,
            ..Default::default()
        })
        .unwrap();

        let generators: Vec<Arc<dyn MusicGeneratorPort>> =
            vec![Arc::new(musicgen_client), Arc::new(suno_client)];
        let state = AppState::new(llm_client, generators, artifact_store);

        let server = HttpServer::new(
            ServerConfig::default().with_artifacts(&root, MOUNT_PATH),
            state,
        );

        Self {
            router: server.router(),
            root,
            llm,
            musicgen,
            suno,
            _dir: dir,
        }
    }

    async fn post_raw(&self, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    async fn get_bytes(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn files_in(&self, dir: &str) -> usize {
        std::fs::read_dir(self.root.join(dir)).unwrap().count()
    }
}

// ============================================================================
// Prompt transformation
// ============================================================================

#[tokio::test]
async fn transform_prompt_returns_trimmed_prompt() {
    let app = TestApp::spawn(None).await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "  melancholic, lo-fi hip hop, 75 BPM, rain ambience \n"
        })))
        .expect(1)
        .mount(&app.llm)
        .await;

    let (status, body) = app
        .post("/api/transform_prompt", json!({ "user_input": "rainy day alone" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["transformed_prompt"],
        "melancholic, lo-fi hip hop, 75 BPM, rain ambience"
    );
}

#[tokio::test]
async fn transform_prompt_blank_generation_is_500() {
    let app = TestApp::spawn(None).await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "   " })))
        .mount(&app.llm)
        .await;

    let (status, body) = app
        .post("/api/transform_prompt", json!({ "user_input": "anything" }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["errno"], 500);
}

#[tokio::test]
async fn transform_prompt_llm_error_is_503() {
    let app = TestApp::spawn(None).await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&app.llm)
        .await;

    let (status, _) = app
        .post("/api/transform_prompt", json!({ "user_input": "anything" }))
        .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

// ============================================================================
// Music generation
// ============================================================================

#[tokio::test]
async fn local_generation_end_to_end() {
    let app = TestApp::spawn(None).await;
    let audio = b"RIFF\x2c\x00\x00\x00WAVEfmt \x10\x00\x00\x00".to_vec();

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "audio": STANDARD.encode(&audio) })),
        )
        .expect(1)
        .mount(&app.musicgen)
        .await;

    let (status, body) = app
        .post(
            "/api/generate-music",
            json!({ "prompt": "tense, ambient cinematic, 70 BPM", "generator": "local" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "tense");
    assert_eq!(body["source"], "from MusicGen");

    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("/generated_audios/local/"));

    let file_name = url.rsplit('/').next().unwrap();
    let stored = std::fs::read(app.root.join("local").join(file_name)).unwrap();
    assert_eq!(stored, audio);

    let (status, served) = app.get_bytes(url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(served, audio);
}

#[tokio::test]
async fn local_generation_failure_is_500() {
    let app = TestApp::spawn(None).await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "done": true })))
        .mount(&app.musicgen)
        .await;

    let (status, _) = app
        .post(
            "/api/generate-music",
            json!({ "prompt": "calm, piano", "generator": "local" }),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.files_in("local"), 0);
}

#[tokio::test]
async fn cloud_generation_returns_202_pending() {
    let app = TestApp::spawn(Some("test-key")).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": { "taskId": "task-789" }
        })))
        .expect(1)
        .mount(&app.suno)
        .await;

    let (status, body) = app
        .post(
            "/api/generate-music",
            json!({ "prompt": " uplifting , pop, 120 BPM", "generator": "cloud" }),
        )
        .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["title"], "uplifting");
    assert_eq!(body["source"], "from Suno");
    assert_eq!(body["task_id"], "task-789");
    assert!(body["message"].is_string());
    assert!(body.get("url").is_none());
}

#[tokio::test]
async fn cloud_generation_without_credential_is_500() {
    let app = TestApp::spawn(None).await;

    let (status, body) = app
        .post(
            "/api/generate-music",
            json!({ "prompt": "uplifting, pop", "generator": "suno" }),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("credential"));
}

#[tokio::test]
async fn unsupported_generator_is_400() {
    let app = TestApp::spawn(Some("test-key")).await;

    for prompt in ["tense, ambient", "x", "a, b, c, d"] {
        let (status, body) = app
            .post(
                "/api/generate-music",
                json!({ "prompt": prompt, "generator": "unsupported" }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errno"], 400);
    }
}

#[tokio::test]
async fn empty_prompt_is_400() {
    let app = TestApp::spawn(None).await;

    let (status, _) = app
        .post("/api/generate-music", json!({ "prompt": "", "generator": "local" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/api/generate-music", json!({ "generator": "local" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = TestApp::spawn(None).await;

    let (status, _) = app.post_raw("/api/generate-music", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Suno callback
// ============================================================================

#[tokio::test]
async fn callback_stores_audio_under_cloud() {
    let app = TestApp::spawn(None).await;
    let audio = b"RIFF suno audio".to_vec();

    let (status, body) = app
        .post(
            "/api/suno_callback",
            json!({ "audio_base64": STANDARD.encode(&audio), "task_id": "task-789" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("/generated_audios/cloud/"));
    let file_name = url.rsplit('/').next().unwrap();
    assert_eq!(std::fs::read(app.root.join("cloud").join(file_name)).unwrap(), audio);
}

#[tokio::test]
async fn callback_without_audio_is_400_and_writes_nothing() {
    let app = TestApp::spawn(None).await;

    for payload in [json!({}), json!({ "task_id": "t" }), json!({ "audio_base64": "" })] {
        let (status, _) = app.post("/api/suno_callback", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    assert_eq!(app.files_in("cloud"), 0);
}

#[tokio::test]
async fn callback_with_undecodable_body_is_500() {
    let app = TestApp::spawn(None).await;

    let (status, _) = app.post_raw("/api/suno_callback", "not json at all").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = app
        .post("/api/suno_callback", json!({ "audio_base64": "%%%" }))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(app.files_in("cloud"), 0);
}

// ============================================================================
// Ping
// ============================================================================

#[tokio::test]
async fn ping_lists_generators() {
    let app = TestApp::spawn(None).await;

    let request = Request::builder().uri("/api/ping").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["generators"], json!(["local", "cloud"]));
}
