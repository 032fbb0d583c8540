//! Admin product editor.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::{debug, info};

use crate::domain::{
    editor::{EditorError, Notification, Notifier},
    products::{
        ProductsService, ValidationError,
        draft::ProductDraft,
        models::{Product, ProductId},
    },
    uploads::{ImageFile, ImageUploader, UploadBatch},
};

/// What the editor is doing, as seen by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// No draft open.
    Closed,

    /// Composing a new product.
    Creating,

    /// Changing an existing product.
    Editing,

    /// Images are being uploaded for the draft.
    Uploading,

    /// The draft is being written to the store.
    Saving,
}

/// Proof that an upload was started for a particular editor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct UploadTicket {
    session: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activity {
    Idle,
    Uploading,
    Saving,
}

#[derive(Debug)]
struct Session {
    id: u64,
    draft: ProductDraft,
    activity: Activity,
}

/// Marks the session as saving until dropped, so a save that is abandoned
/// mid-flight leaves the form usable again.
struct SavingGuard<'a> {
    activity: &'a mut Activity,
}

impl<'a> SavingGuard<'a> {
    fn begin(activity: &'a mut Activity) -> Self {
        *activity = Activity::Saving;

        Self { activity }
    }
}

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        *self.activity = Activity::Idle;
    }
}

/// Drives the create/edit form: holds the draft, runs uploads and saves,
/// and reports every outcome through a [`Notifier`].
pub struct AdminEditor {
    products: Arc<dyn ProductsService>,
    uploader: Arc<ImageUploader>,
    notifier: Arc<dyn Notifier>,
    session: Option<Session>,
    sessions_started: u64,
}

impl AdminEditor {
    /// A closed editor.
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductsService>,
        uploader: Arc<ImageUploader>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            products,
            uploader,
            notifier,
            session: None,
            sessions_started: 0,
        }
    }

    /// Current phase, derived from the open session.
    #[must_use]
    pub fn phase(&self) -> EditorPhase {
        match &self.session {
            None => EditorPhase::Closed,
            Some(session) => match session.activity {
                Activity::Uploading => EditorPhase::Uploading,
                Activity::Saving => EditorPhase::Saving,
                Activity::Idle if session.draft.id.is_some() => EditorPhase::Editing,
                Activity::Idle => EditorPhase::Creating,
            },
        }
    }

    /// The open draft, if any.
    #[must_use]
    pub fn draft(&self) -> Option<&ProductDraft> {
        self.session.as_ref().map(|session| &session.draft)
    }

    /// The open draft, for form edits. Stays editable while an upload runs.
    pub fn draft_mut(&mut self) -> Option<&mut ProductDraft> {
        self.session.as_mut().map(|session| &mut session.draft)
    }

    /// Open an empty draft, replacing any open session.
    pub fn begin_create(&mut self) {
        self.open(ProductDraft::default());
    }

    /// Open a draft seeded from `product`, replacing any open session.
    pub fn begin_edit(&mut self, product: &Product) {
        self.open(ProductDraft::from_product(product));
    }

    fn open(&mut self, draft: ProductDraft) {
        self.sessions_started = self.sessions_started.wrapping_add(1);
        self.session = Some(Session {
            id: self.sessions_started,
            draft,
            activity: Activity::Idle,
        });
    }

    /// Discard the draft. Nothing is sent anywhere.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("editor session cancelled");
        }
    }

    /// Mark an upload as running for the open session.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoDraft`] when nothing is open and
    /// [`EditorError::UploadInProgress`] or [`EditorError::Busy`] when the
    /// session is already doing something.
    pub fn start_upload(&mut self) -> Result<UploadTicket, EditorError> {
        let session = self.session.as_mut().ok_or(EditorError::NoDraft)?;

        match session.activity {
            Activity::Idle => {
                session.activity = Activity::Uploading;

                Ok(UploadTicket {
                    session: session.id,
                })
            }
            Activity::Uploading => Err(EditorError::UploadInProgress),
            Activity::Saving => Err(EditorError::Busy),
        }
    }

    /// Merge a finished batch into the draft and report each failed file.
    ///
    /// Returns the number of images appended.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::StaleUpload`] when the ticket's session has been
    /// cancelled or replaced. Its failures are still reported.
    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        batch: UploadBatch,
    ) -> Result<usize, EditorError> {
        for failure in &batch.failures {
            self.notifier
                .notify(Notification::failure("Upload failed", failure.message()));
        }

        let session = self
            .session
            .as_mut()
            .filter(|session| {
                session.id == ticket.session && session.activity == Activity::Uploading
            })
            .ok_or(EditorError::StaleUpload)?;

        let appended = batch.urls.len();

        session.draft.append_images(batch.urls);
        session.activity = Activity::Idle;

        Ok(appended)
    }

    /// Upload `files` and append the resulting URLs to the draft.
    ///
    /// # Errors
    ///
    /// See [`Self::start_upload`] and [`Self::finish_upload`].
    pub async fn upload_images(&mut self, files: Vec<ImageFile>) -> Result<usize, EditorError> {
        let ticket = self.start_upload()?;
        let batch = self.uploader.upload(files).await;

        self.finish_upload(ticket, batch)
    }

    /// Remove the draft image at `index`. The stored object is not deleted.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ImageIndex`] when `index` is out of range.
    pub fn remove_image(&mut self, index: usize) -> Result<String, EditorError> {
        let draft = &mut self.session.as_mut().ok_or(EditorError::NoDraft)?.draft;
        let len = draft.images().len();

        draft
            .remove_image(index)
            .ok_or(EditorError::ImageIndex { index, len })
    }

    /// Save the draft: create when it has no id, update otherwise.
    ///
    /// On success the session closes. On failure the draft is kept so the
    /// admin can retry. Dropping the returned future mid-save also keeps the
    /// draft and returns the session to idle.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Validation`] for a missing name without calling
    /// the store, [`EditorError::Busy`] while an upload or save is running, and
    /// [`EditorError::Products`] when the store rejects the write.
    pub async fn submit(&mut self) -> Result<Product, EditorError> {
        let session = self.session.as_mut().ok_or(EditorError::NoDraft)?;

        if session.activity != Activity::Idle {
            return Err(EditorError::Busy);
        }

        if !session.draft.has_name() {
            self.notifier.notify(Notification::failure(
                "Validation error",
                ValidationError::MissingName.to_string(),
            ));

            return Err(ValidationError::MissingName.into());
        }

        let existing = session.draft.id.clone();
        let saved = match &existing {
            Some(id) => {
                let update = session.draft.to_update()?;
                let _saving = SavingGuard::begin(&mut session.activity);

                self.products.update_product(id.clone(), update).await
            }
            None => {
                let product = session.draft.to_new_product()?;
                let _saving = SavingGuard::begin(&mut session.activity);

                self.products.create_product(product).await
            }
        };

        match saved {
            Ok(product) => {
                let title = if existing.is_some() {
                    "Product updated"
                } else {
                    "Product created"
                };

                info!(product_id = %product.id, "editor saved product");

                self.session = None;
                self.notifier.notify(Notification::success(title));

                Ok(product)
            }
            Err(error) => {
                self.notifier
                    .notify(Notification::failure("Save failed", error.to_string()));

                Err(error.into())
            }
        }
    }

    /// Delete a product from the admin list. Nothing happens unless the admin
    /// confirmed. Returns whether a delete was issued.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Products`] when the store rejects the delete.
    pub async fn delete_product(
        &mut self,
        id: ProductId,
        confirmed: bool,
    ) -> Result<bool, EditorError> {
        if !confirmed {
            return Ok(false);
        }

        match self.products.delete_product(id).await {
            Ok(()) => {
                self.notifier.notify(Notification::success("Product deleted"));

                Ok(true)
            }
            Err(error) => {
                self.notifier
                    .notify(Notification::failure("Delete failed", error.to_string()));

                Err(error.into())
            }
        }
    }

    /// Products for the admin list, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Products`] when the catalog cannot be loaded.
    pub async fn products(&self) -> Result<Vec<Product>, EditorError> {
        Ok(self.products.list_products().await?)
    }
}

impl Debug for AdminEditor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AdminEditor")
            .field("phase", &self.phase())
            .field("draft", &self.draft())
            .finish_non_exhaustive()
    }
}
