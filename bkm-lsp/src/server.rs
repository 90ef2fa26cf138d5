//! Main language server implementation

use std::collections::HashMap;
use std::sync::Arc;

use crate::features::commands::{execute_command, COMMAND_THEME};
use crate::features::completion::{complete as compute_completions, CompletionCandidate};
use crate::features::semantic_tokens::{
    collect_line_tokens, encode_semantic_tokens, legend as semantic_tokens_legend, LineToken,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tower_lsp::async_trait;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionOptions, CompletionParams, CompletionResponse,
    CompletionTextEdit, Documentation, ExecuteCommandOptions, ExecuteCommandParams,
    InitializeParams, InitializeResult, InitializedParams, Position, Range,
    SemanticTokensFullOptions, SemanticTokensOptions, SemanticTokensParams, SemanticTokensResult,
    ServerCapabilities, ServerInfo, TextDocumentItem, TextDocumentSyncCapability,
    TextDocumentSyncKind, TextEdit, Url, WorkDoneProgressOptions,
};
use tower_lsp::Client;

pub trait LspClient: Send + Sync + Clone + 'static {}
impl LspClient for Client {}

pub trait FeatureProvider: Send + Sync + 'static {
    fn line_tokens(&self, text: &str) -> Vec<LineToken>;
    fn complete(&self, line: &str, cursor_column: u32) -> Vec<CompletionCandidate<'static>>;
}

#[derive(Default)]
pub struct DefaultFeatureProvider;

impl DefaultFeatureProvider {
    pub fn new() -> Self {
        Self
    }
}

impl FeatureProvider for DefaultFeatureProvider {
    fn line_tokens(&self, text: &str) -> Vec<LineToken> {
        collect_line_tokens(text)
    }

    fn complete(&self, line: &str, cursor_column: u32) -> Vec<CompletionCandidate<'static>> {
        compute_completions(line, cursor_column)
    }
}

/// Text of open documents, keyed by URI. The format needs no parsed
/// representation server-side, so the store holds plain text under full sync.
#[derive(Default)]
struct DocumentStore {
    entries: RwLock<HashMap<Url, Arc<String>>>,
}

impl DocumentStore {
    async fn upsert(&self, uri: Url, text: String) {
        self.entries.write().await.insert(uri, Arc::new(text));
    }

    async fn get(&self, uri: &Url) -> Option<Arc<String>> {
        self.entries.read().await.get(uri).cloned()
    }

    async fn remove(&self, uri: &Url) {
        self.entries.write().await.remove(uri);
    }
}

pub struct BkmLanguageServer<C = Client, P = DefaultFeatureProvider> {
    _client: C,
    documents: DocumentStore,
    features: Arc<P>,
}

impl BkmLanguageServer<Client, DefaultFeatureProvider> {
    pub fn new(client: Client) -> Self {
        Self::with_features(client, Arc::new(DefaultFeatureProvider::new()))
    }
}

impl<C, P> BkmLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    pub fn with_features(client: C, features: Arc<P>) -> Self {
        Self {
            _client: client,
            documents: DocumentStore::default(),
            features,
        }
    }

    async fn document(&self, uri: &Url) -> Option<Arc<String>> {
        self.documents.get(uri).await
    }
}

fn to_completion_item(candidate: &CompletionCandidate<'_>, line: u32) -> CompletionItem {
    // Engine columns are 1-based; LSP characters are 0-based.
    let range = Range {
        start: Position::new(line, candidate.span.start_column - 1),
        end: Position::new(line, candidate.span.end_column - 1),
    };
    CompletionItem {
        label: candidate.spec.label.to_string(),
        kind: Some(CompletionItemKind::FUNCTION),
        documentation: Some(Documentation::String(candidate.spec.detail.to_string())),
        text_edit: Some(CompletionTextEdit::Edit(TextEdit {
            range,
            new_text: candidate.spec.insert_text.to_string(),
        })),
        ..CompletionItem::default()
    }
}

#[async_trait]
impl<C, P> tower_lsp::LanguageServer for BkmLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        let capabilities = ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            completion_provider: Some(CompletionOptions {
                trigger_characters: Some(vec![";".to_string()]),
                resolve_provider: Some(false),
                ..CompletionOptions::default()
            }),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: vec![COMMAND_THEME.to_string()],
                work_done_progress_options: WorkDoneProgressOptions::default(),
            }),
            semantic_tokens_provider: Some(
                lsp_types::SemanticTokensServerCapabilities::SemanticTokensOptions(
                    SemanticTokensOptions {
                        work_done_progress_options: WorkDoneProgressOptions::default(),
                        legend: semantic_tokens_legend(),
                        range: None,
                        full: Some(SemanticTokensFullOptions::Bool(true)),
                    },
                ),
            ),
            ..ServerCapabilities::default()
        };

        Ok(InitializeResult {
            capabilities,
            server_info: Some(ServerInfo {
                name: "bkm-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {}

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: lsp_types::DidOpenTextDocumentParams) {
        let TextDocumentItem { uri, text, .. } = params.text_document;
        self.documents.upsert(uri, text).await;
    }

    async fn did_change(&self, params: lsp_types::DidChangeTextDocumentParams) {
        if let Some(change) = params.content_changes.into_iter().last() {
            self.documents
                .upsert(params.text_document.uri, change.text)
                .await;
        }
    }

    async fn did_close(&self, params: lsp_types::DidCloseTextDocumentParams) {
        self.documents.remove(&params.text_document.uri).await;
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        if let Some(text) = self.document(&params.text_document.uri).await {
            let tokens = self.features.line_tokens(&text);
            let data = encode_semantic_tokens(&tokens);
            Ok(Some(SemanticTokensResult::Tokens(
                lsp_types::SemanticTokens {
                    result_id: None,
                    data,
                },
            )))
        } else {
            Ok(None)
        }
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let position = params.text_document_position.position;
        let Some(text) = self
            .document(&params.text_document_position.text_document.uri)
            .await
        else {
            return Ok(None);
        };
        let Some(line) = text.lines().nth(position.line as usize) else {
            return Ok(None);
        };

        let candidates = self.features.complete(line, position.character + 1);
        let items: Vec<CompletionItem> = candidates
            .iter()
            .map(|candidate| to_completion_item(candidate, position.line))
            .collect();
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        execute_command(&params.command, &params.arguments)
    }
}
