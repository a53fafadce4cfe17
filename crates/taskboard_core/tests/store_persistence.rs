use taskboard_core::db::migrations::latest_version;
use taskboard_core::db::{open_store, open_store_in_memory};
use taskboard_core::{
    AuthService, BoardService, KvProjectRepository, KvTaskRepository, KvUserRepository, RepoError,
    StateStore, TaskDraft, TaskStatus,
};
use uuid::Uuid;

#[test]
fn migration_registry_has_a_version() {
    assert_eq!(latest_version(), 1);
}

#[test]
fn kv_roundtrip_write_read_remove() {
    let store = open_store_in_memory().unwrap();

    assert!(store.read("users").unwrap().is_none());

    store.write("users", "[]").unwrap();
    assert_eq!(store.read("users").unwrap().as_deref(), Some("[]"));

    store.write("users", "[1]").unwrap();
    assert_eq!(store.read("users").unwrap().as_deref(), Some("[1]"));

    store.remove("users").unwrap();
    assert!(store.read("users").unwrap().is_none());

    // Removing an absent key is a no-op.
    store.remove("users").unwrap();
}

#[test]
fn state_survives_reopening_a_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskboard.db");

    let project_id = {
        let store = open_store(&path).unwrap();
        let mut auth = AuthService::new(KvUserRepository::try_new(&store).unwrap());
        auth.register("Ada", "ada@example.com", "hunter2").unwrap();
        let session = auth.current_user().unwrap().clone();

        let mut board = BoardService::new(
            KvProjectRepository::try_new(&store).unwrap(),
            KvTaskRepository::try_new(&store).unwrap(),
        );
        let project_id = board
            .create_project(Some(&session), "Website", "Marketing site relaunch")
            .unwrap()
            .unwrap();
        board
            .create_task(TaskDraft {
                project_id,
                name: "Write launch copy".to_string(),
                description: "Hero text and pricing section".to_string(),
                status: TaskStatus::Progress,
                tags: vec!["copy".to_string()],
                due_date: "2031-01-15".to_string(),
                assigned_user_id: session.id,
            })
            .unwrap();
        project_id
    };

    let store = open_store(&path).unwrap();
    let mut auth = AuthService::new(KvUserRepository::try_new(&store).unwrap());
    auth.restore_session().unwrap();
    let session = auth.current_user().expect("session survives reopen").clone();
    assert_eq!(session.email, "ada@example.com");

    let board = BoardService::new(
        KvProjectRepository::try_new(&store).unwrap(),
        KvTaskRepository::try_new(&store).unwrap(),
    );
    let projects = board.projects(Some(&session));
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, project_id);

    let tasks = board.tasks_by_project(project_id);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].status, TaskStatus::Progress);
    assert_eq!(tasks[0].due_date, "2031-01-15");
}

#[test]
fn corrupt_collection_snapshot_fails_repository_construction() {
    let store = open_store_in_memory().unwrap();
    store.write("projects", "{not json").unwrap();

    let err = KvProjectRepository::try_new(&store).unwrap_err();
    assert!(matches!(err, RepoError::Snapshot { key: "projects", .. }));

    // Other collections are unaffected.
    assert!(KvTaskRepository::try_new(&store).is_ok());
}

#[test]
fn users_snapshot_keeps_passwords_and_session_snapshot_does_not() {
    let store = open_store_in_memory().unwrap();
    let mut auth = AuthService::new(KvUserRepository::try_new(&store).unwrap());
    auth.register("Ada", "ada@example.com", "hunter2").unwrap();

    let users_raw = store.read("users").unwrap().expect("users snapshot");
    let users: serde_json::Value = serde_json::from_str(&users_raw).unwrap();
    assert_eq!(users[0]["name"], "Ada");
    assert_eq!(users[0]["password"], "hunter2");

    let session_raw = store
        .read("currentUser")
        .unwrap()
        .expect("session snapshot");
    let session: serde_json::Value = serde_json::from_str(&session_raw).unwrap();
    assert_eq!(session["email"], "ada@example.com");
    assert!(session.get("password").is_none());
}

#[test]
fn project_and_task_snapshots_use_camel_case_wire_fields() {
    let store = open_store_in_memory().unwrap();
    let mut auth = AuthService::new(KvUserRepository::try_new(&store).unwrap());
    auth.register("Ada", "ada@example.com", "hunter2").unwrap();
    let session = auth.current_user().unwrap().clone();

    let mut board = BoardService::new(
        KvProjectRepository::try_new(&store).unwrap(),
        KvTaskRepository::try_new(&store).unwrap(),
    );
    let project_id = board
        .create_project(Some(&session), "Website", "Marketing site relaunch")
        .unwrap()
        .unwrap();
    board
        .create_task(TaskDraft {
            project_id,
            name: "Write launch copy".to_string(),
            description: "Hero text and pricing section".to_string(),
            status: TaskStatus::Backlog,
            tags: Vec::new(),
            due_date: String::new(),
            assigned_user_id: Uuid::new_v4(),
        })
        .unwrap();

    let projects_raw = store.read("projects").unwrap().expect("projects snapshot");
    let projects: serde_json::Value = serde_json::from_str(&projects_raw).unwrap();
    assert!(projects[0].get("userId").is_some());
    assert!(projects[0].get("createdAt").is_some());

    let tasks_raw = store.read("tasks").unwrap().expect("tasks snapshot");
    let tasks: serde_json::Value = serde_json::from_str(&tasks_raw).unwrap();
    assert!(tasks[0].get("projectId").is_some());
    assert!(tasks[0].get("dueDate").is_some());
    assert!(tasks[0].get("assignedUserId").is_some());
    assert_eq!(tasks[0]["status"], "backlog");
}
