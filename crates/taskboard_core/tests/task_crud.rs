use taskboard_core::db::open_store_in_memory;
use taskboard_core::{
    AuthService, BoardService, KvProjectRepository, KvTaskRepository, KvUserRepository, Session,
    SqliteStateStore, TaskDraft, TaskPatch, TaskStatus,
};
use uuid::Uuid;

fn board(
    store: &SqliteStateStore,
) -> BoardService<KvProjectRepository<'_, SqliteStateStore>, KvTaskRepository<'_, SqliteStateStore>>
{
    BoardService::new(
        KvProjectRepository::try_new(store).unwrap(),
        KvTaskRepository::try_new(store).unwrap(),
    )
}

fn signed_in(store: &SqliteStateStore, name: &str, email: &str) -> Session {
    let mut auth = AuthService::new(KvUserRepository::try_new(store).unwrap());
    auth.register(name, email, "pw").unwrap();
    auth.current_user().unwrap().clone()
}

fn draft(project_id: Uuid, name: &str) -> TaskDraft {
    TaskDraft {
        project_id,
        name: name.to_string(),
        description: "integration fixture task".to_string(),
        status: TaskStatus::Backlog,
        tags: vec!["fixture".to_string()],
        due_date: String::new(),
        assigned_user_id: Uuid::new_v4(),
    }
}

#[test]
fn create_and_get_roundtrip() {
    let store = open_store_in_memory().unwrap();
    let session = signed_in(&store, "Ada", "ada@example.com");
    let mut board = board(&store);
    let project = board
        .create_project(Some(&session), "Website", "Marketing site relaunch")
        .unwrap()
        .unwrap();

    let mut task_draft = draft(project, "Write launch copy");
    task_draft.due_date = "2031-01-15".to_string();
    task_draft.assigned_user_id = session.id;
    let id = board.create_task(task_draft).unwrap();

    let tasks = board.tasks_by_project(project);
    assert_eq!(tasks.len(), 1);
    let task = &tasks[0];
    assert_eq!(task.id, id);
    assert_eq!(task.name, "Write launch copy");
    assert_eq!(task.status, TaskStatus::Backlog);
    assert_eq!(task.tags, vec!["fixture".to_string()]);
    assert_eq!(task.due_date, "2031-01-15");
    assert_eq!(task.assigned_user_id, session.id);
    assert!(!task.created_at.is_empty());
}

#[test]
fn status_only_update_changes_nothing_else() {
    let store = open_store_in_memory().unwrap();
    let session = signed_in(&store, "Ada", "ada@example.com");
    let mut board = board(&store);
    let project = board
        .create_project(Some(&session), "Website", "Marketing site relaunch")
        .unwrap()
        .unwrap();
    let id = board.create_task(draft(project, "Drag me")).unwrap();
    let before = board.tasks_by_project(project).remove(0);

    // The drag-and-drop path between board columns.
    assert!(board
        .update_task(id, &TaskPatch::status_only(TaskStatus::Done))
        .unwrap());

    let after = board.tasks_by_project(project).remove(0);
    assert_eq!(after.status, TaskStatus::Done);
    assert_eq!(after.name, before.name);
    assert_eq!(after.description, before.description);
    assert_eq!(after.tags, before.tags);
    assert_eq!(after.due_date, before.due_date);
    assert_eq!(after.assigned_user_id, before.assigned_user_id);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn update_unknown_id_is_a_silent_no_op() {
    let store = open_store_in_memory().unwrap();
    let mut board = board(&store);
    assert!(!board
        .update_task(Uuid::new_v4(), &TaskPatch::status_only(TaskStatus::Done))
        .unwrap());
}

#[test]
fn delete_twice_is_a_no_op_the_second_time() {
    let store = open_store_in_memory().unwrap();
    let session = signed_in(&store, "Ada", "ada@example.com");
    let mut board = board(&store);
    let project = board
        .create_project(Some(&session), "Website", "Marketing site relaunch")
        .unwrap()
        .unwrap();
    let id = board.create_task(draft(project, "Short lived")).unwrap();
    let other = board.create_task(draft(project, "Bystander")).unwrap();

    assert!(board.delete_task(id).unwrap());
    assert!(!board.delete_task(id).unwrap());

    let remaining = board.tasks_by_project(project);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other);
}

#[test]
fn tasks_by_project_keeps_insertion_order() {
    let store = open_store_in_memory().unwrap();
    let session = signed_in(&store, "Ada", "ada@example.com");
    let mut board = board(&store);
    let project = board
        .create_project(Some(&session), "Website", "Marketing site relaunch")
        .unwrap()
        .unwrap();

    let first = board.create_task(draft(project, "first")).unwrap();
    let second = board.create_task(draft(project, "second")).unwrap();
    let third = board.create_task(draft(project, "third")).unwrap();

    let ids: Vec<_> = board
        .tasks_by_project(project)
        .iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[test]
fn board_groups_tasks_by_column_in_stable_order() {
    let store = open_store_in_memory().unwrap();
    let session = signed_in(&store, "Ada", "ada@example.com");
    let mut board = board(&store);
    let project = board
        .create_project(Some(&session), "Website", "Marketing site relaunch")
        .unwrap()
        .unwrap();

    let mut in_progress = draft(project, "building");
    in_progress.status = TaskStatus::Progress;
    board.create_task(in_progress).unwrap();
    board.create_task(draft(project, "queued")).unwrap();

    let columns = board.board(Some(project));
    let statuses: Vec<_> = columns.iter().map(|(status, _)| *status).collect();
    assert_eq!(statuses, TaskStatus::ALL.to_vec());

    assert_eq!(columns[0].1.len(), 1); // backlog
    assert_eq!(columns[1].1.len(), 0); // discussion
    assert_eq!(columns[2].1.len(), 1); // progress
    assert_eq!(columns[3].1.len(), 0); // done
    assert_eq!(columns[0].1[0].name, "queued");
    assert_eq!(columns[2].1[0].name, "building");
}

#[test]
fn task_queries_are_not_filtered_by_project_ownership() {
    let store = open_store_in_memory().unwrap();

    let ada = signed_in(&store, "Ada", "ada@example.com");
    let mut board_a = board(&store);
    let adas_project = board_a
        .create_project(Some(&ada), "Ada's board", "Owned by Ada only")
        .unwrap()
        .unwrap();
    board_a.create_task(draft(adas_project, "Ada's task")).unwrap();
    drop(board_a);

    let grace = signed_in(&store, "Grace", "grace@example.com");
    let board_b = board(&store);

    // Grace cannot see Ada's project...
    let graces_projects = board_b.projects(Some(&grace));
    assert!(graces_projects.iter().all(|p| p.id != adas_project));

    // ...but Ada's tasks are visible through direct task queries.
    assert_eq!(board_b.tasks().len(), 1);
    assert_eq!(board_b.tasks_by_project(adas_project).len(), 1);
}
