use crate::core::middleware::{membership_required, record_action, LogFailurePolicy};
use crate::core::search::SearchCriteria;
use crate::domain::model::{Action, Item, ItemId, Member, MemberId};
use crate::domain::ports::ActionRecorder;
use crate::utils::error::{LibraryError, Result};

type Transition = fn(&mut Member, &mut Item) -> Result<String>;

/// Owns every item and member for the lifetime of the process.
pub struct Catalog<R: ActionRecorder> {
    items: Vec<Item>,
    members: Vec<Member>,
    recorder: R,
    log_failure: LogFailurePolicy,
}

impl<R: ActionRecorder> Catalog<R> {
    pub fn new(recorder: R) -> Self {
        Self {
            items: Vec::new(),
            members: Vec::new(),
            recorder,
            log_failure: LogFailurePolicy::default(),
        }
    }

    pub fn with_log_failure_policy(mut self, policy: LogFailurePolicy) -> Self {
        self.log_failure = policy;
        self
    }

    pub fn add_item(&mut self, item: Item) -> Result<()> {
        if self.item(item.id).is_some() {
            return Err(LibraryError::DuplicateItemId { id: item.id });
        }
        tracing::debug!("Adding item {}: {}", item.id, item.title);
        self.items.push(item);
        Ok(())
    }

    pub fn add_member(&mut self, member: Member) -> Result<()> {
        if self.member(member.id).is_some() {
            return Err(LibraryError::DuplicateMemberId { id: member.id });
        }
        tracing::debug!("Adding member {}: {}", member.id, member.name);
        self.members.push(member);
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Items matching every term of `criteria`, in catalog order.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| criteria.matches(item))
            .collect()
    }

    /// Descriptions of all items, or `None` when the catalog is empty.
    pub fn display_all(&self) -> Option<Vec<String>> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.iter().map(Item::describe).collect())
    }

    pub fn available_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_available()).count()
    }

    pub fn borrowed_items(&self, member_id: MemberId) -> Result<Vec<&Item>> {
        let member = self
            .member(member_id)
            .ok_or(LibraryError::MemberNotFound { id: member_id })?;
        Ok(member
            .borrowed_items()
            .iter()
            .filter_map(|id| self.item(*id))
            .collect())
    }

    pub fn borrow(&mut self, member_id: MemberId, item_id: ItemId) -> Result<String> {
        self.run_action(Action::Borrow, member_id, item_id, Member::borrow_item)
    }

    pub fn return_item(&mut self, member_id: MemberId, item_id: ItemId) -> Result<String> {
        self.run_action(Action::Return, member_id, item_id, Member::return_item)
    }

    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    fn run_action(
        &mut self,
        action: Action,
        member_id: MemberId,
        item_id: ItemId,
        transition: Transition,
    ) -> Result<String> {
        let member = self
            .members
            .iter_mut()
            .find(|member| member.id == member_id)
            .ok_or(LibraryError::MemberNotFound { id: member_id })?;
        membership_required(member)?;

        let outcome = match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => transition(member, item),
            None => Err(LibraryError::ItemNotFound { id: item_id }),
        };

        record_action(&mut self.recorder, self.log_failure, action, outcome)
    }
}
