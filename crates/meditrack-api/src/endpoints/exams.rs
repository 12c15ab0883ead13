use meditrack_core::models::{Exam, ExamCompletion, ExamRegistration, ExamReport};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use super::{decode_list, paths};
use crate::client::ApiClient;
use crate::error::ApiResult;

/// `GET /exams/pending` has answered both with a bare list and with
/// `{count, exams}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PendingBody {
    List(Vec<Exam>),
    Wrapped {
        #[serde(default)]
        exams: Vec<Exam>,
    },
    Other(Value),
}

impl ApiClient {
    #[instrument(skip(self, exam), fields(patient_id = exam.patient_id, exam_type = %exam.exam_type))]
    pub async fn register_exam(&self, exam: &ExamRegistration) -> ApiResult<Value> {
        self.post(paths::REGISTER_EXAM, exam).await
    }

    #[instrument(skip(self))]
    pub async fn exams_today(&self) -> ApiResult<Vec<Exam>> {
        decode_list(self.get(paths::EXAMS_TODAY).await?, "exams today")
    }

    #[instrument(skip(self))]
    pub async fn exams_pending(&self) -> ApiResult<Vec<Exam>> {
        let body: Option<PendingBody> = self.get(paths::EXAMS_PENDING).await?;
        Ok(match body {
            Some(PendingBody::List(exams)) | Some(PendingBody::Wrapped { exams }) => exams,
            Some(PendingBody::Other(other)) => decode_list(other, "pending exams")?,
            None => Vec::new(),
        })
    }

    #[instrument(skip(self))]
    pub async fn exam_reports(&self) -> ApiResult<Vec<Exam>> {
        decode_list(self.get(paths::EXAM_REPORTS).await?, "report queue")
    }

    #[instrument(skip(self, completion), fields(exam_id = %completion.exam_id))]
    pub async fn complete_exam(&self, completion: &ExamCompletion) -> ApiResult<Value> {
        self.patch(paths::COMPLETE_EXAM, completion).await
    }

    #[instrument(skip(self, report), fields(exam_id = %report.exam_id))]
    pub async fn update_report(&self, report: &ExamReport) -> ApiResult<Value> {
        self.patch(paths::EXAM_REPORT, report).await
    }
}
