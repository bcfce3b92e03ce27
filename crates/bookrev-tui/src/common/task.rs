//! Async task bookkeeping.
//!
//! Every spawned backend call carries a `TaskId`. The reducer claims the id
//! when it emits the effect and only accepts a completion whose id is still
//! the active one for that kind; anything else is a stale result and is
//! dropped.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    BookList,
    BookCreate,
    Login,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Marks `id` as the active task, superseding any previous one.
    pub fn start(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub book_list: TaskState,
    pub book_create: TaskState,
    pub login: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::BookList => &self.book_list,
            TaskKind::BookCreate => &self.book_create,
            TaskKind::Login => &self.login,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::BookList => &mut self.book_list,
            TaskKind::BookCreate => &mut self.book_create,
            TaskKind::Login => &mut self.login,
        }
    }

    /// Allocates a fresh id and makes it the active task for `kind`.
    pub fn begin(&mut self, kind: TaskKind, seq: &mut TaskSeq) -> TaskId {
        let id = seq.next_id();
        self.state_mut(kind).start(id);
        id
    }

    pub fn is_any_running(&self) -> bool {
        self.book_list.is_running() || self.book_create.is_running() || self.login.is_running()
    }
}
