use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::auth::application::ports::outgoing::DashboardTeardown;
use crate::cv::application::ports::outgoing::{CvExportError, CvExporter, PictureEncoder};
use crate::cv::domain::{
    CvAggregate, CvForm, CvFormView, EducationEntry, EducationField, EntryId, PictureRead,
    PictureTicket, ProfileField, ProjectEntry, ProjectField, SkillTag, ValidationFailure,
};
use crate::session::domain::ClientId;
use crate::shared::forms::{FieldCommand, FieldCommandError};

pub const CV_GENERATED_MESSAGE: &str = "CV generated! Check the console for details.";

#[derive(Debug, thiserror::Error)]
pub enum CvFormError {
    #[error("The CV form is closed")]
    FormClosed,

    #[error(transparent)]
    Field(#[from] FieldCommandError),

    #[error("Profile picture must be an image, got `{0}`")]
    UnsupportedPicture(String),

    #[error("Please fill all required fields correctly before submitting.")]
    Validation(ValidationFailure),

    #[error("Failed to export CV: {0}")]
    Export(#[from] CvExportError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Applied,
    /// The picture is being read; the field changes when it finishes.
    PictureReadStarted(PictureTicket),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedCv {
    pub message: &'static str,
    pub cv: CvAggregate,
}

#[async_trait]
pub trait ICvFormUseCase: Send + Sync {
    async fn view(&self, client: &ClientId) -> CvFormView;

    async fn open(&self, client: &ClientId) -> CvFormView;

    async fn close(&self, client: &ClientId) -> CvFormView;

    async fn apply_field(
        &self,
        client: &ClientId,
        command: FieldCommand<ProfileField>,
    ) -> Result<FieldUpdate, CvFormError>;

    async fn add_project(&self, client: &ClientId) -> Result<ProjectEntry, CvFormError>;

    /// `Ok(None)` when no project has that id.
    async fn update_project(
        &self,
        client: &ClientId,
        id: EntryId,
        field: ProjectField,
        value: String,
    ) -> Result<Option<ProjectEntry>, CvFormError>;

    async fn remove_project(
        &self,
        client: &ClientId,
        id: EntryId,
    ) -> Result<Option<ProjectEntry>, CvFormError>;

    async fn add_education(&self, client: &ClientId) -> Result<EducationEntry, CvFormError>;

    async fn update_education(
        &self,
        client: &ClientId,
        id: EntryId,
        field: EducationField,
        value: String,
    ) -> Result<Option<EducationEntry>, CvFormError>;

    async fn remove_education(
        &self,
        client: &ClientId,
        id: EntryId,
    ) -> Result<Option<EducationEntry>, CvFormError>;

    /// `Ok(None)` when the value is empty or already selected.
    async fn add_skill(
        &self,
        client: &ClientId,
        value: String,
        label: Option<String>,
    ) -> Result<Option<SkillTag>, CvFormError>;

    async fn remove_skill(
        &self,
        client: &ClientId,
        id: EntryId,
    ) -> Result<Option<SkillTag>, CvFormError>;

    /// Validates, exports and closes the form. Nothing changes on failure.
    async fn submit(&self, client: &ClientId) -> Result<SubmittedCv, CvFormError>;
}

/// Forms left untouched this long are dropped the next time a form is opened.
pub const FORM_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

struct PendingPicture {
    ticket: PictureTicket,
    handle: JoinHandle<()>,
}

struct FormSlot {
    form: CvForm,
    touched: Instant,
}

type FormMap = Arc<Mutex<HashMap<ClientId, FormSlot>>>;
type PictureReadMap = Arc<Mutex<HashMap<ClientId, PendingPicture>>>;

/// Holds every client's form session in memory. A form exists from `open`
/// until logout or until it sits idle past [`FORM_IDLE_TTL`].
///
/// Lock order is `picture_reads` then `forms`. Picture read tasks never hold
/// both.
pub struct CvFormUseCase {
    forms: FormMap,
    picture_reads: PictureReadMap,
    encoder: Arc<dyn PictureEncoder>,
    exporter: Arc<dyn CvExporter>,
}

fn open_form<'a>(
    forms: &'a mut HashMap<ClientId, FormSlot>,
    client: &ClientId,
) -> Result<&'a mut CvForm, CvFormError> {
    let slot = forms.get_mut(client).ok_or(CvFormError::FormClosed)?;
    if !slot.form.is_open() {
        return Err(CvFormError::FormClosed);
    }
    slot.touched = Instant::now();
    Ok(&mut slot.form)
}

impl CvFormUseCase {
    pub fn new(encoder: Arc<dyn PictureEncoder>, exporter: Arc<dyn CvExporter>) -> Self {
        Self {
            forms: Arc::new(Mutex::new(HashMap::new())),
            picture_reads: Arc::new(Mutex::new(HashMap::new())),
            encoder,
            exporter,
        }
    }

    async fn with_open_form<R>(
        &self,
        client: &ClientId,
        mutate: impl FnOnce(&mut CvForm) -> R + Send,
    ) -> Result<R, CvFormError> {
        let mut forms = self.forms.lock().await;
        let form = open_form(&mut forms, client)?;
        Ok(mutate(form))
    }

    fn spawn_picture_read(&self, client: ClientId, read: PictureRead) -> JoinHandle<()> {
        let forms = Arc::clone(&self.forms);
        let reads = Arc::clone(&self.picture_reads);
        let encoder = Arc::clone(&self.encoder);
        let ticket = read.ticket;

        tokio::spawn(async move {
            let encoded = encoder.encode(read.blob).await;

            {
                let mut forms = forms.lock().await;
                match forms.get_mut(&client) {
                    None => {
                        debug!(client = %client, "Form discarded before picture read finished");
                    }
                    Some(slot) => match encoded {
                        Ok(data_url) => {
                            if slot.form.complete_picture_read(ticket, data_url) {
                                info!(client = %client, "Profile picture updated");
                            } else {
                                warn!(client = %client, ticket = ?ticket, "Discarding superseded picture read");
                            }
                        }
                        Err(e) => {
                            slot.form.fail_picture_read(ticket);
                            error!(client = %client, error = %e, "Profile picture read failed");
                        }
                    },
                }
            }

            let mut reads = reads.lock().await;
            if reads.get(&client).is_some_and(|pending| pending.ticket == ticket) {
                reads.remove(&client);
            }
        })
    }

    /// Drops every form idle for at least [`FORM_IDLE_TTL`] along with its
    /// picture read.
    fn expire_idle_forms(
        reads: &mut HashMap<ClientId, PendingPicture>,
        forms: &mut HashMap<ClientId, FormSlot>,
        now: Instant,
    ) {
        let expired: Vec<ClientId> = forms
            .iter()
            .filter(|(_, slot)| now.duration_since(slot.touched) >= FORM_IDLE_TTL)
            .map(|(client, _)| *client)
            .collect();

        for client in &expired {
            forms.remove(client);
            if let Some(pending) = reads.remove(client) {
                pending.handle.abort();
            }
        }
        if !expired.is_empty() {
            debug!(count = expired.len(), "Dropped idle CV forms");
        }
    }

    /// Waits for the client's latest picture read to finish.
    #[cfg(test)]
    pub(crate) async fn settle_picture_read(&self, client: &ClientId) {
        let pending = self.picture_reads.lock().await.remove(client);
        if let Some(pending) = pending {
            let _ = pending.handle.await;
        }
    }

    #[cfg(test)]
    pub(crate) async fn pending_picture_reads(&self) -> usize {
        self.picture_reads.lock().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn tracked_forms(&self) -> usize {
        self.forms.lock().await.len()
    }
}

#[async_trait]
impl ICvFormUseCase for CvFormUseCase {
    async fn view(&self, client: &ClientId) -> CvFormView {
        let forms = self.forms.lock().await;
        match forms.get(client) {
            Some(slot) => slot.form.view(),
            None => CvForm::default().view(),
        }
    }

    async fn open(&self, client: &ClientId) -> CvFormView {
        let mut reads = self.picture_reads.lock().await;
        let mut forms = self.forms.lock().await;
        let now = Instant::now();
        Self::expire_idle_forms(&mut reads, &mut forms, now);

        let slot = forms.entry(*client).or_insert_with(|| FormSlot {
            form: CvForm::default(),
            touched: now,
        });
        slot.touched = now;
        slot.form.open();
        slot.form.view()
    }

    async fn close(&self, client: &ClientId) -> CvFormView {
        let mut forms = self.forms.lock().await;
        match forms.get_mut(client) {
            Some(slot) => {
                slot.touched = Instant::now();
                slot.form.close();
                slot.form.view()
            }
            None => CvForm::default().view(),
        }
    }

    async fn apply_field(
        &self,
        client: &ClientId,
        command: FieldCommand<ProfileField>,
    ) -> Result<FieldUpdate, CvFormError> {
        let picture_selected = match &command {
            FieldCommand::FileSelected {
                name: ProfileField::ProfilePicture,
                blob,
            } => {
                if !blob.mime_type.starts_with("image/") {
                    return Err(CvFormError::UnsupportedPicture(blob.mime_type.clone()));
                }
                true
            }
            _ => false,
        };

        if !picture_selected {
            self.with_open_form(client, |form| form.apply(command))
                .await??;
            return Ok(FieldUpdate::Applied);
        }

        // Held until the task is registered: the registered read must carry
        // the newest ticket.
        let mut reads = self.picture_reads.lock().await;
        let read = self
            .with_open_form(client, |form| form.apply(command))
            .await??;

        match read {
            Some(read) => {
                let ticket = read.ticket;
                let handle = self.spawn_picture_read(*client, read);
                if let Some(previous) = reads.insert(*client, PendingPicture { ticket, handle }) {
                    debug!(client = %client, ticket = ?previous.ticket, "Cancelling previous picture read");
                    previous.handle.abort();
                }
                Ok(FieldUpdate::PictureReadStarted(ticket))
            }
            None => Ok(FieldUpdate::Applied),
        }
    }

    async fn add_project(&self, client: &ClientId) -> Result<ProjectEntry, CvFormError> {
        self.with_open_form(client, |form| form.add_project()).await
    }

    async fn update_project(
        &self,
        client: &ClientId,
        id: EntryId,
        field: ProjectField,
        value: String,
    ) -> Result<Option<ProjectEntry>, CvFormError> {
        self.with_open_form(client, |form| {
            form.update_project(id, field, value).cloned()
        })
        .await
    }

    async fn remove_project(
        &self,
        client: &ClientId,
        id: EntryId,
    ) -> Result<Option<ProjectEntry>, CvFormError> {
        self.with_open_form(client, |form| form.remove_project(id))
            .await
    }

    async fn add_education(&self, client: &ClientId) -> Result<EducationEntry, CvFormError> {
        self.with_open_form(client, |form| form.add_education())
            .await
    }

    async fn update_education(
        &self,
        client: &ClientId,
        id: EntryId,
        field: EducationField,
        value: String,
    ) -> Result<Option<EducationEntry>, CvFormError> {
        self.with_open_form(client, |form| {
            form.update_education(id, field, value).cloned()
        })
        .await
    }

    async fn remove_education(
        &self,
        client: &ClientId,
        id: EntryId,
    ) -> Result<Option<EducationEntry>, CvFormError> {
        self.with_open_form(client, |form| form.remove_education(id))
            .await
    }

    async fn add_skill(
        &self,
        client: &ClientId,
        value: String,
        label: Option<String>,
    ) -> Result<Option<SkillTag>, CvFormError> {
        self.with_open_form(client, |form| form.add_skill(&value, label.as_deref()))
            .await
    }

    async fn remove_skill(
        &self,
        client: &ClientId,
        id: EntryId,
    ) -> Result<Option<SkillTag>, CvFormError> {
        self.with_open_form(client, |form| form.remove_skill(id))
            .await
    }

    async fn submit(&self, client: &ClientId) -> Result<SubmittedCv, CvFormError> {
        let cv = self
            .with_open_form(client, |form| form.snapshot())
            .await?
            .map_err(|failure| {
                debug!(client = %client, reason = %failure, "CV validation failed");
                CvFormError::Validation(failure)
            })?;

        // The lock is not held while exporting.
        if let Err(e) = self.exporter.export(&cv).await {
            error!(client = %client, error = %e, "CV export failed");
            return Err(e.into());
        }

        if let Some(slot) = self.forms.lock().await.get_mut(client) {
            slot.form.close();
        }

        info!(
            client = %client,
            projects = cv.projects.len(),
            skills = cv.skills.len(),
            "CV generated"
        );
        Ok(SubmittedCv {
            message: CV_GENERATED_MESSAGE,
            cv,
        })
    }
}

#[async_trait]
impl DashboardTeardown for CvFormUseCase {
    async fn teardown(&self, client: &ClientId) {
        if let Some(pending) = self.picture_reads.lock().await.remove(client) {
            pending.handle.abort();
        }
        if self.forms.lock().await.remove(client).is_some() {
            debug!(client = %client, "CV form session discarded");
        }
    }
}
