use leptos::*;
use std::rc::Rc;

use crate::api::ApiError;

/// How a `submit` call ended when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Saved,
    /// Another save was still in flight; nothing was sent.
    Busy,
}

/// A backend collection edited through one draft form.
#[allow(async_fn_in_trait)]
pub trait CrudResource: 'static {
    type Item: Clone + 'static;
    type Id: Clone + PartialEq + 'static;
    type Draft: Clone + Default + 'static;

    async fn list(&self) -> Result<Vec<Self::Item>, ApiError>;
    async fn create(&self, draft: &Self::Draft) -> Result<(), ApiError>;
    async fn update(&self, id: &Self::Id, draft: &Self::Draft) -> Result<(), ApiError>;
    async fn delete(&self, id: &Self::Id) -> Result<(), ApiError>;

    fn item_id(item: &Self::Item) -> Self::Id;
    fn draft_from(item: &Self::Item) -> Self::Draft;

    /// Required-field check run before any request is sent.
    fn validate(_draft: &Self::Draft, _editing: bool) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Draft plus collection state for one admin tab. Every successful mutation
/// re-fetches the collection; nothing is patched locally.
pub struct CrudController<R: CrudResource> {
    resource: Rc<R>,
    pub items: RwSignal<Vec<R::Item>>,
    pub draft: RwSignal<R::Draft>,
    pub editing: RwSignal<Option<R::Id>>,
    pub pending: RwSignal<bool>,
}

impl<R: CrudResource> Clone for CrudController<R> {
    fn clone(&self) -> Self {
        Self {
            resource: Rc::clone(&self.resource),
            items: self.items,
            draft: self.draft,
            editing: self.editing,
            pending: self.pending,
        }
    }
}

impl<R: CrudResource> CrudController<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource: Rc::new(resource),
            items: create_rw_signal(Vec::new()),
            draft: create_rw_signal(R::Draft::default()),
            editing: create_rw_signal(None),
            pending: create_rw_signal(false),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn is_editing(&self) -> bool {
        self.editing.with(Option::is_some)
    }

    pub async fn reload(&self) -> Result<(), ApiError> {
        let items = self.resource.list().await?;
        self.items.set(items);
        Ok(())
    }

    pub fn begin_edit(&self, item: &R::Item) {
        self.draft.set(R::draft_from(item));
        self.editing.set(Some(R::item_id(item)));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.draft.set(R::Draft::default());
    }

    /// Creates when nothing is being edited, updates otherwise. The draft
    /// survives a failure so the user can correct it.
    pub async fn submit(&self) -> Result<Submission, ApiError> {
        if self.pending.get_untracked() {
            return Ok(Submission::Busy);
        }
        let draft = self.draft.get_untracked();
        let target = self.editing.get_untracked();
        R::validate(&draft, target.is_some())?;

        self.pending.set(true);
        let result = match &target {
            Some(id) => self.resource.update(id, &draft).await,
            None => self.resource.create(&draft).await,
        };
        let result = match result {
            Ok(()) => {
                self.cancel_edit();
                self.reload().await.map(|()| Submission::Saved)
            }
            Err(err) => Err(err),
        };
        self.pending.set(false);
        result
    }

    pub async fn delete(&self, id: &R::Id) -> Result<(), ApiError> {
        self.pending.set(true);
        let result = match self.resource.delete(id).await {
            Ok(()) => {
                if self.editing.with_untracked(|editing| editing.as_ref() == Some(id)) {
                    self.cancel_edit();
                }
                self.reload().await
            }
            Err(err) => Err(err),
        };
        self.pending.set(false);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct NoteDraft {
        text: String,
    }

    #[derive(Default)]
    struct Notes {
        rows: RefCell<Vec<Note>>,
        reject_writes: bool,
    }

    impl CrudResource for Notes {
        type Item = Note;
        type Id = u32;
        type Draft = NoteDraft;

        async fn list(&self) -> Result<Vec<Note>, ApiError> {
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, draft: &NoteDraft) -> Result<(), ApiError> {
            if self.reject_writes {
                return Err(ApiError::from_status(500, r#"{"detail":"disk full"}"#));
            }
            let mut rows = self.rows.borrow_mut();
            let id = rows.len() as u32 + 1;
            rows.push(Note {
                id,
                text: draft.text.clone(),
            });
            Ok(())
        }

        async fn update(&self, id: &u32, draft: &NoteDraft) -> Result<(), ApiError> {
            for row in self.rows.borrow_mut().iter_mut().filter(|r| r.id == *id) {
                row.text = draft.text.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: &u32) -> Result<(), ApiError> {
            self.rows.borrow_mut().retain(|r| r.id != *id);
            Ok(())
        }

        fn item_id(item: &Note) -> u32 {
            item.id
        }

        fn draft_from(item: &Note) -> NoteDraft {
            NoteDraft {
                text: item.text.clone(),
            }
        }

        fn validate(draft: &NoteDraft, _editing: bool) -> Result<(), ApiError> {
            if draft.text.trim().is_empty() {
                return Err(ApiError::validation("Text is required"));
            }
            Ok(())
        }
    }

    #[test]
    fn submit_while_saving_reports_busy_and_sends_nothing() {
        let runtime = create_runtime();
        let controller = CrudController::new(Notes::default());
        controller.draft.set(NoteDraft {
            text: "hello".into(),
        });
        controller.pending.set(true);

        assert_eq!(block_on(controller.submit()), Ok(Submission::Busy));
        assert!(controller.resource().rows.borrow().is_empty());
        assert_eq!(controller.draft.get().text, "hello");

        controller.pending.set(false);
        assert_eq!(block_on(controller.submit()), Ok(Submission::Saved));
        runtime.dispose();
    }

    #[test]
    fn submit_without_target_creates_resets_and_reloads() {
        let runtime = create_runtime();
        let controller = CrudController::new(Notes::default());
        controller.draft.set(NoteDraft {
            text: "hello".into(),
        });

        block_on(controller.submit()).unwrap();

        assert_eq!(controller.draft.get(), NoteDraft::default());
        assert!(!controller.is_editing());
        assert!(!controller.pending.get());
        assert_eq!(controller.items.get().len(), 1);
        assert_eq!(controller.items.get()[0].text, "hello");
        runtime.dispose();
    }

    #[test]
    fn submit_with_target_updates_in_place() {
        let runtime = create_runtime();
        let controller = CrudController::new(Notes::default());
        controller.draft.set(NoteDraft { text: "a".into() });
        block_on(controller.submit()).unwrap();

        let item = controller.items.get()[0].clone();
        controller.begin_edit(&item);
        assert!(controller.is_editing());
        assert_eq!(controller.draft.get().text, "a");

        controller.draft.set(NoteDraft { text: "b".into() });
        block_on(controller.submit()).unwrap();

        let items = controller.items.get();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "b");
        assert!(!controller.is_editing());
        runtime.dispose();
    }

    #[test]
    fn validation_failure_sends_nothing() {
        let runtime = create_runtime();
        let controller = CrudController::new(Notes::default());
        let err = block_on(controller.submit()).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert!(controller.resource().rows.borrow().is_empty());
        runtime.dispose();
    }

    #[test]
    fn failed_write_keeps_draft_and_reports_detail() {
        let runtime = create_runtime();
        let controller = CrudController::new(Notes {
            reject_writes: true,
            ..Default::default()
        });
        controller.draft.set(NoteDraft {
            text: "keep me".into(),
        });

        let err = block_on(controller.submit()).unwrap_err();

        assert_eq!(err.error, "disk full");
        assert_eq!(controller.draft.get().text, "keep me");
        assert!(!controller.pending.get());
        runtime.dispose();
    }

    #[test]
    fn deleting_edited_item_clears_the_form() {
        let runtime = create_runtime();
        let controller = CrudController::new(Notes::default());
        controller.draft.set(NoteDraft { text: "x".into() });
        block_on(controller.submit()).unwrap();
        let item = controller.items.get()[0].clone();
        controller.begin_edit(&item);

        block_on(controller.delete(&item.id)).unwrap();

        assert!(controller.items.get().is_empty());
        assert!(!controller.is_editing());
        assert_eq!(controller.draft.get(), NoteDraft::default());
        runtime.dispose();
    }
}
