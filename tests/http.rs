use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct GoalDto {
    id: String,
    title: String,
    categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DaySummaryDto {
    date: String,
    completed_goal_ids: Vec<String>,
    completed_count: usize,
    goal_count: usize,
    percent: u32,
    streak: u32,
}

#[derive(Debug, Deserialize)]
struct WeekDayDto {
    date: String,
    label: String,
    count: usize,
}

#[derive(Debug, Deserialize)]
struct WeekDto {
    start_date: String,
    end_date: String,
    days: Vec<WeekDayDto>,
    total: usize,
    percent: u32,
}

#[derive(Debug, Deserialize)]
struct MonthDayDto {
    day: u32,
    count: usize,
    tier: String,
}

#[derive(Debug, Deserialize)]
struct MonthDto {
    leading_blanks: u32,
    days: Vec<MonthDayDto>,
    total_actions: usize,
    percent: u32,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("goalstride_http_{}_{}", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/day")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_dir = unique_data_dir();
    let child = Command::new(env!("CARGO_BIN_EXE_goalstride"))
        .env("PORT", port.to_string())
        .env("APP_DATA_DIR", data_dir)
        .env("RUST_LOG", "info")
        .env_remove("GEMINI_API_KEY")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn list_goals(client: &Client, base_url: &str) -> Vec<GoalDto> {
    client
        .get(format!("{base_url}/api/goals"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn day_summary(client: &Client, base_url: &str, date: &str) -> DaySummaryDto {
    client
        .get(format!("{base_url}/api/day?date={date}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn toggle(client: &Client, base_url: &str, date: &str, goal_id: &str) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/toggle"))
        .json(&serde_json::json!({ "date": date, "goal_id": goal_id }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_seeds_default_goals_on_first_run() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let goals = list_goals(&client, &server.base_url).await;
    assert!(!goals.is_empty());
    assert!(goals.iter().all(|g| !g.categories.is_empty()));
    assert!(goals.iter().any(|g| g.title == "Meditate"));
}

#[tokio::test]
async fn http_toggle_twice_restores_membership() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let goals = list_goals(&client, &server.base_url).await;
    let goal_id = goals[0].id.clone();
    let date = "2026-03-10";

    let before = day_summary(&client, &server.base_url, date).await;
    assert!(!before.completed_goal_ids.contains(&goal_id));

    let resp = toggle(&client, &server.base_url, date, &goal_id).await;
    assert!(resp.status().is_success());
    let after = day_summary(&client, &server.base_url, date).await;
    assert!(after.completed_goal_ids.contains(&goal_id));
    assert_eq!(after.completed_count, before.completed_count + 1);
    assert_eq!(after.date, date);
    assert_eq!(after.goal_count, goals.len());

    let resp = toggle(&client, &server.base_url, date, &goal_id).await;
    assert!(resp.status().is_success());
    let restored = day_summary(&client, &server.base_url, date).await;
    assert_eq!(restored.completed_goal_ids, before.completed_goal_ids);
}

#[tokio::test]
async fn http_toggle_rejects_unknown_goal() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let resp = toggle(&client, &server.base_url, "2026-03-10", "no-such-goal").await;
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_add_goal_validation() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list_goals(&client, &server.base_url).await;

    let resp = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "title": "   ", "categories": ["Health"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let resp = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "title": "Stretch", "categories": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let unchanged = list_goals(&client, &server.base_url).await;
    assert_eq!(unchanged.len(), before.len());

    let created: GoalDto = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "title": "  Stretch  ", "categories": ["Health"] }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created.title, "Stretch");

    let after = list_goals(&client, &server.base_url).await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().unwrap().id, created.id);
}

#[tokio::test]
async fn http_update_goal_keeps_categories_when_emptied() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created: GoalDto = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "title": "Budget Review", "categories": ["Finance"] }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let updated: GoalDto = client
        .patch(format!("{}/api/goals/{}", server.base_url, created.id))
        .json(&serde_json::json!({ "title": "Weekly Budget", "categories": [] }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.title, "Weekly Budget");
    assert_eq!(updated.categories, vec!["Finance"]);

    let resp = client
        .patch(format!("{}/api/goals/missing", server.base_url))
        .json(&serde_json::json!({ "title": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_delete_goal_purges_logs() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created: GoalDto = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "title": "Ephemeral", "categories": ["Other"] }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let date = "2026-04-02";
    toggle(&client, &server.base_url, date, &created.id).await;
    let logged = day_summary(&client, &server.base_url, date).await;
    assert!(logged.completed_goal_ids.contains(&created.id));

    let resp = client
        .delete(format!("{}/api/goals/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let goals = list_goals(&client, &server.base_url).await;
    assert!(goals.iter().all(|g| g.id != created.id));
    let purged = day_summary(&client, &server.base_url, date).await;
    assert!(!purged.completed_goal_ids.contains(&created.id));
}

#[tokio::test]
async fn http_reorder_moves_goal() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list_goals(&client, &server.base_url).await;
    assert!(before.len() >= 3);

    let reordered: Vec<GoalDto> = client
        .post(format!("{}/api/goals/reorder", server.base_url))
        .json(&serde_json::json!({ "from": 0, "to": 2 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reordered[2].id, before[0].id);
    assert_eq!(reordered[0].id, before[1].id);

    let resp = client
        .post(format!("{}/api/goals/reorder", server.base_url))
        .json(&serde_json::json!({ "from": 0, "to": 999 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    // Put things back for the other tests.
    let restored: Vec<GoalDto> = client
        .post(format!("{}/api/goals/reorder", server.base_url))
        .json(&serde_json::json!({ "from": 2, "to": 0 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(restored[0].id, before[0].id);
}

#[tokio::test]
async fn http_week_and_month_aggregations() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let goals = list_goals(&client, &server.base_url).await;
    toggle(&client, &server.base_url, "2026-05-20", &goals[0].id).await;
    toggle(&client, &server.base_url, "2026-05-20", &goals[1].id).await;
    toggle(&client, &server.base_url, "2026-05-18", &goals[0].id).await;

    let week: WeekDto = client
        .get(format!("{}/api/week?end=2026-05-20", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(week.days.len(), 7);
    assert_eq!(week.start_date, "2026-05-14");
    assert_eq!(week.end_date, "2026-05-20");
    assert_eq!(week.days[6].date, "2026-05-20");
    assert_eq!(week.days[6].count, 2);
    assert_eq!(week.days[4].count, 1);
    assert_eq!(week.total, 3);
    assert!(week.days.iter().all(|d| !d.label.is_empty()));
    assert!(week.percent <= 100);

    let month: MonthDto = client
        .get(format!("{}/api/month?year=2026&month=5", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(month.days.len(), 31);
    // 2026-05-01 is a Friday.
    assert_eq!(month.leading_blanks, 5);
    assert!(month.total_actions >= 3);
    assert_eq!(month.days[19].day, 20);
    assert_eq!(month.days[19].count, 2);
    assert_ne!(month.days[19].tier, "none");
    assert_eq!(month.days[2].count, 0);
    assert_eq!(month.days[2].tier, "none");
    assert!(month.percent <= 100);

    let resp = client
        .get(format!("{}/api/month?year=2026&month=13", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    // Clean up the toggles so reruns against the shared server stay stable.
    toggle(&client, &server.base_url, "2026-05-20", &goals[0].id).await;
    toggle(&client, &server.base_url, "2026-05-20", &goals[1].id).await;
    toggle(&client, &server.base_url, "2026-05-18", &goals[0].id).await;
}

#[tokio::test]
async fn http_streak_visible_in_day_summary() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let summary = day_summary(&client, &server.base_url, "2026-03-10").await;
    assert!(summary.percent <= 100);
    // Nothing in this suite touches today or yesterday, so no streak accrues.
    let _ = summary.streak;
}

#[tokio::test]
async fn http_insight_endpoint_returns_slot() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let value: serde_json::Value = client
        .get(format!("{}/api/insight", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(value.get("insight").is_some());
}
