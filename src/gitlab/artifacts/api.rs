//! Job artifact download endpoints

use tokio::io::AsyncWrite;

use crate::error::Result;
use crate::gitlab::GitlabClient;

/// Percent-encode every segment of an artifact path, keeping the slashes
fn encode_artifact_path(artifact_path: &str) -> String {
    artifact_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

impl GitlabClient {
    /// Download one file from a job's artifacts
    ///
    /// `GET /projects/:id/jobs/:job_id/artifacts/*artifact_path`
    pub async fn download_single_artifact(
        &self,
        project_id: u64,
        job_id: u64,
        artifact_path: &str,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64> {
        let url = format!(
            "{}/jobs/{}/artifacts/{}",
            self.project_url(project_id),
            job_id,
            encode_artifact_path(artifact_path)
        );
        let error_context = format!("artifact '{}' of job {}", artifact_path, job_id);

        self.download_to(&url, &error_context, sink).await
    }

    /// Download the whole artifacts archive of the latest successful job on a ref
    ///
    /// `GET /projects/:id/jobs/artifacts/:ref_name/download?job=name`
    ///
    /// GitLab picks the job itself; a resolved job or pipeline ID does not
    /// select which archive is served.
    pub async fn download_archive(
        &self,
        project_id: u64,
        ref_name: &str,
        job_name: &str,
        sink: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64> {
        let url = format!(
            "{}/jobs/artifacts/{}/download?job={}",
            self.project_url(project_id),
            urlencoding::encode(ref_name),
            urlencoding::encode(job_name)
        );
        let error_context = format!("artifacts archive of job '{}' on '{}'", job_name, ref_name);

        self.download_to(&url, &error_context, sink).await
    }
}
