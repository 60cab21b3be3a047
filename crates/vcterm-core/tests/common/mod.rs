#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use vcterm_api::{
    AboutInfo, ChildCollection, EntityKind, ObjectContent, ObjectRef, TaskInfo, TaskRef,
    TaskState, ViewRef,
};
use vcterm_client::{ClientError, Connector, Credentials, InventoryClient};
use vcterm_core::{
    Context, Dialog, DialogCode, DialogError, FormField, MenuEntry, Session, Settings,
};

// Scripted dialog

/// Canned operator answer
#[derive(Debug, Clone)]
pub enum Answer {
    Menu(DialogCode, Option<String>),
    Input(DialogCode, String),
    Form(DialogCode, Vec<String>),
}

impl Answer {
    pub fn pick(tag: &str) -> Self {
        Answer::Menu(DialogCode::Ok, Some(tag.to_string()))
    }

    pub fn back() -> Self {
        Answer::Menu(DialogCode::Esc, None)
    }

    pub fn input(value: &str) -> Self {
        Answer::Input(DialogCode::Ok, value.to_string())
    }

    pub fn login(host: &str, user: &str, password: &str) -> Self {
        Answer::Form(
            DialogCode::Ok,
            vec![host.to_string(), user.to_string(), password.to_string()],
        )
    }
}

/// Recorded widget call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Title(String),
    Menu {
        title: String,
        text: String,
        entries: Vec<MenuEntry>,
    },
    Msgbox {
        title: String,
        text: String,
    },
    Infobox {
        title: String,
        text: String,
    },
    Input {
        title: String,
        init: String,
    },
    Form {
        title: String,
        fields: Vec<FormField>,
    },
    Gauge {
        title: String,
        text: String,
        percent: u8,
    },
}

#[derive(Debug, Default)]
struct DialogState {
    answers: VecDeque<Answer>,
    calls: Vec<Call>,
}

/// Dialog answering from a script
///
/// Once the script runs out, menus answer ESC and inputs/forms answer
/// CANCEL, so every screen unwinds.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialog {
    state: Arc<Mutex<DialogState>>,
}

impl ScriptedDialog {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            state: Arc::new(Mutex::new(DialogState {
                answers: answers.into_iter().collect(),
                calls: Vec::new(),
            })),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn menus(&self) -> Vec<(String, Vec<MenuEntry>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Menu { title, entries, .. } => Some((title, entries)),
                _ => None,
            })
            .collect()
    }

    pub fn msgboxes(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Msgbox { title, text } => Some((title, text)),
                _ => None,
            })
            .collect()
    }

    pub fn gauges(&self) -> Vec<u8> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Gauge { percent, .. } => Some(percent),
                _ => None,
            })
            .collect()
    }

    pub fn forms(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Form { .. }))
            .count()
    }

    pub fn remaining(&self) -> usize {
        self.state.lock().unwrap().answers.len()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn next(&self) -> Option<Answer> {
        self.state.lock().unwrap().answers.pop_front()
    }
}

impl Dialog for ScriptedDialog {
    fn set_background_title(&mut self, title: &str) {
        self.record(Call::Title(title.to_string()));
    }

    fn menu(
        &mut self,
        title: &str,
        text: &str,
        entries: &[MenuEntry],
    ) -> Result<(DialogCode, Option<String>), DialogError> {
        self.record(Call::Menu {
            title: title.to_string(),
            text: text.to_string(),
            entries: entries.to_vec(),
        });
        match self.next() {
            Some(Answer::Menu(code, tag)) => Ok((code, tag)),
            Some(other) => panic!("menu {title:?} got {other:?}"),
            None => Ok((DialogCode::Esc, None)),
        }
    }

    fn msgbox(&mut self, title: &str, text: &str) -> Result<(), DialogError> {
        self.record(Call::Msgbox {
            title: title.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn infobox(&mut self, title: &str, text: &str) -> Result<(), DialogError> {
        self.record(Call::Infobox {
            title: title.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn inputbox(
        &mut self,
        title: &str,
        _text: &str,
        init: &str,
    ) -> Result<(DialogCode, String), DialogError> {
        self.record(Call::Input {
            title: title.to_string(),
            init: init.to_string(),
        });
        match self.next() {
            Some(Answer::Input(code, value)) => Ok((code, value)),
            Some(other) => panic!("inputbox {title:?} got {other:?}"),
            None => Ok((DialogCode::Cancel, init.to_string())),
        }
    }

    fn form(
        &mut self,
        title: &str,
        _text: &str,
        fields: &[FormField],
    ) -> Result<(DialogCode, Vec<String>), DialogError> {
        self.record(Call::Form {
            title: title.to_string(),
            fields: fields.to_vec(),
        });
        match self.next() {
            Some(Answer::Form(code, values)) => Ok((code, values)),
            Some(other) => panic!("form {title:?} got {other:?}"),
            None => Ok((DialogCode::Cancel, Vec::new())),
        }
    }

    fn gauge(&mut self, title: &str, text: &str, percent: u8) -> Result<(), DialogError> {
        self.record(Call::Gauge {
            title: title.to_string(),
            text: text.to_string(),
            percent,
        });
        Ok(())
    }
}

// Recording inventory

#[derive(Debug, Default)]
struct InventoryState {
    views_created: usize,
    views_destroyed: usize,
    renames: Vec<(ObjectRef, String)>,
    task_polls: usize,
    disconnects: usize,
    remote_calls: usize,
}

/// In-memory inventory recording every request
#[derive(Debug, Default)]
pub struct MockInventory {
    pub objects: HashMap<EntityKind, Vec<ObjectContent>>,
    pub children: HashMap<(ObjectRef, ChildCollection), Vec<ObjectContent>>,
    pub properties: HashMap<ObjectRef, ObjectContent>,
    /// Task states returned by successive polls; the last one repeats
    pub task_states: Vec<TaskInfo>,
    pub fail_listing: bool,
    state: Mutex<InventoryState>,
}

impl MockInventory {
    pub fn views(&self) -> (usize, usize) {
        let state = self.state.lock().unwrap();
        (state.views_created, state.views_destroyed)
    }

    pub fn renames(&self) -> Vec<(ObjectRef, String)> {
        self.state.lock().unwrap().renames.clone()
    }

    pub fn task_polls(&self) -> usize {
        self.state.lock().unwrap().task_polls
    }

    pub fn disconnects(&self) -> usize {
        self.state.lock().unwrap().disconnects
    }

    pub fn remote_calls(&self) -> usize {
        self.state.lock().unwrap().remote_calls
    }

    fn touch(&self) {
        self.state.lock().unwrap().remote_calls += 1;
    }
}

#[async_trait]
impl InventoryClient for MockInventory {
    async fn about(&self) -> Result<AboutInfo, ClientError> {
        Ok(AboutInfo {
            full_name: "Mock Server 1.0".into(),
            version: "1.0".into(),
            api_type: "VirtualCenter".into(),
        })
    }

    async fn create_view(&self, kind: EntityKind) -> Result<ViewRef, ClientError> {
        self.touch();
        let mut state = self.state.lock().unwrap();
        state.views_created += 1;
        Ok(ViewRef {
            view: format!("view-{kind}-{}", state.views_created),
        })
    }

    async fn collect_properties(
        &self,
        _view: &ViewRef,
        kind: EntityKind,
        path_set: &[&str],
        _include_refs: bool,
    ) -> Result<Vec<ObjectContent>, ClientError> {
        self.touch();
        if self.fail_listing {
            return Err(ClientError::Api {
                status: 503,
                message: "service unavailable".into(),
            });
        }
        assert_eq!(path_set[0], "name");
        Ok(self.objects.get(&kind).cloned().unwrap_or_default())
    }

    async fn destroy_view(&self, _view: &ViewRef) -> Result<(), ClientError> {
        self.touch();
        self.state.lock().unwrap().views_destroyed += 1;
        Ok(())
    }

    async fn retrieve_properties(
        &self,
        obj: &ObjectRef,
        _path_set: &[&str],
    ) -> Result<ObjectContent, ClientError> {
        self.touch();
        self.properties
            .get(obj)
            .cloned()
            .ok_or_else(|| ClientError::Api {
                status: 404,
                message: format!("{obj} not found"),
            })
    }

    async fn retrieve_children(
        &self,
        obj: &ObjectRef,
        collection: ChildCollection,
        _path_set: &[&str],
    ) -> Result<Option<Vec<ObjectContent>>, ClientError> {
        self.touch();
        Ok(self.children.get(&(obj.clone(), collection)).cloned())
    }

    async fn rename(&self, obj: &ObjectRef, new_name: &str) -> Result<TaskRef, ClientError> {
        self.touch();
        self.state
            .lock()
            .unwrap()
            .renames
            .push((obj.clone(), new_name.to_string()));
        Ok(TaskRef {
            task: "task-1".into(),
        })
    }

    async fn task_info(&self, task: &TaskRef) -> Result<TaskInfo, ClientError> {
        self.touch();
        let mut state = self.state.lock().unwrap();
        let index = state.task_polls.min(self.task_states.len().saturating_sub(1));
        state.task_polls += 1;
        Ok(self.task_states.get(index).cloned().unwrap_or(TaskInfo {
            id: task.task.clone(),
            state: TaskState::Success,
            progress: None,
            error: None,
            completed_at: None,
        }))
    }

    async fn disconnect(&self) -> Result<(), ClientError> {
        self.state.lock().unwrap().disconnects += 1;
        Ok(())
    }
}

/// Connector failing a fixed number of times before handing out the mock
#[derive(Debug, Default)]
pub struct MockConnector {
    pub inventory: Arc<MockInventory>,
    pub failures: Mutex<usize>,
    pub attempts: Mutex<Vec<Credentials>>,
}

impl MockConnector {
    pub fn new(inventory: Arc<MockInventory>, failures: usize) -> Self {
        Self {
            inventory,
            failures: Mutex::new(failures),
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> Vec<Credentials> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(
        &self,
        credentials: &Credentials,
    ) -> Result<Arc<dyn InventoryClient>, ClientError> {
        self.attempts.lock().unwrap().push(credentials.clone());
        let mut failures = self.failures.lock().unwrap();
        if *failures > 0 {
            *failures -= 1;
            return Err(ClientError::Unauthorized("invalid credentials".into()));
        }
        let client: Arc<dyn InventoryClient> = self.inventory.clone();
        Ok(client)
    }
}

// Fixtures

pub fn content(kind: EntityKind, id: &str, props: Value) -> ObjectContent {
    ObjectContent {
        obj: Some(ObjectRef::new(kind, id)),
        props: props.as_object().cloned().unwrap_or_default(),
    }
}

pub fn task(state: TaskState, progress: Option<u8>, error: Option<&str>) -> TaskInfo {
    TaskInfo {
        id: "task-1".into(),
        state,
        progress,
        error: error.map(str::to_string),
        completed_at: None,
    }
}

pub fn settings() -> Settings {
    Settings {
        poll_interval_ms: 0,
        ..Settings::default()
    }
}

pub fn context(inventory: &Arc<MockInventory>, dialog: &ScriptedDialog) -> Context {
    let session = Session::new(
        "vc01",
        "admin",
        AboutInfo {
            full_name: "Mock Server 1.0".into(),
            ..AboutInfo::default()
        },
        inventory.clone(),
    );
    Context::new(session, Box::new(dialog.clone()), settings())
}
