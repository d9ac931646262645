use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, ReportRenderer};
use crate::application::services::{AnalysisService, ChatService, RelatedContentService};
use crate::presentation::upload_policy::UploadPolicy;

pub struct AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub analysis_service: Arc<AnalysisService<F, L>>,
    pub chat_service: Arc<ChatService<L>>,
    pub related_content_service: Arc<RelatedContentService<L>>,
    pub report_renderer: Arc<dyn ReportRenderer>,
    pub upload_policy: UploadPolicy,
}

impl<F, L> AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(
        file_loader: Arc<F>,
        llm_client: Arc<L>,
        report_renderer: Arc<dyn ReportRenderer>,
        upload_policy: UploadPolicy,
    ) -> Self {
        Self {
            analysis_service: Arc::new(AnalysisService::new(
                file_loader,
                Arc::clone(&llm_client),
            )),
            chat_service: Arc::new(ChatService::new(Arc::clone(&llm_client))),
            related_content_service: Arc::new(RelatedContentService::new(llm_client)),
            report_renderer,
            upload_policy,
        }
    }
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            chat_service: Arc::clone(&self.chat_service),
            related_content_service: Arc::clone(&self.related_content_service),
            report_renderer: Arc::clone(&self.report_renderer),
            upload_policy: self.upload_policy,
        }
    }
}
