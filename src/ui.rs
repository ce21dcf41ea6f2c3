use chrono::NaiveDate;

pub fn render_index(today: NaiveDate) -> String {
    INDEX_HTML.replace("{{TODAY}}", &today.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>GoalStride</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef1fb;
      --bg-2: #dfe4f7;
      --ink: #1f2437;
      --accent: #5b5bd6;
      --accent-soft: #eceafb;
      --good: #2d9d6f;
      --good-soft: #e0f5ec;
      --card: #ffffff;
      --muted: #8a8fa3;
      --shadow: 0 18px 48px rgba(46, 52, 94, 0.14);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(160deg, var(--bg-1), #f6f3ee 70%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 28px 16px 60px;
    }

    .app {
      width: min(520px, 100%);
      background: var(--card);
      border-radius: 26px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 20px;
    }

    header h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: 1.9rem;
      margin: 0;
    }

    .subtitle {
      margin: 2px 0 0;
      color: var(--muted);
      font-size: 0.92rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(46, 52, 94, 0.07);
      border-radius: 999px;
    }

    .tab {
      flex: 1;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 9px 0;
      font-size: 0.9rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 6px 14px rgba(46, 52, 94, 0.14);
    }

    .nav-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 8px;
    }

    .nav-row .title { font-weight: 600; font-size: 0.95rem; }
    .nav-row .range { color: var(--muted); font-size: 0.8rem; }

    .nav-btn {
      border: 1px solid rgba(46, 52, 94, 0.12);
      background: white;
      border-radius: 12px;
      width: 34px;
      height: 34px;
      font-size: 1rem;
      cursor: pointer;
      color: var(--ink);
    }

    .nav-btn:disabled { opacity: 0.35; cursor: default; }

    .jump-today {
      border: none;
      background: none;
      color: var(--accent);
      font-size: 0.75rem;
      font-weight: 700;
      cursor: pointer;
      padding: 2px 4px;
    }

    .insight {
      background: linear-gradient(135deg, #5b5bd6, #8b5bd6);
      color: white;
      border-radius: 18px;
      padding: 16px;
    }

    .insight .label {
      font-size: 0.7rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.14em;
      opacity: 0.8;
      margin: 0 0 6px;
    }

    .insight p { margin: 0; font-size: 0.92rem; line-height: 1.45; }

    .cards {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 12px;
    }

    .card {
      background: white;
      border: 1px solid rgba(46, 52, 94, 0.08);
      border-radius: 16px;
      padding: 14px;
    }

    .card .label {
      margin: 0 0 4px;
      font-size: 0.7rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .card .value { margin: 0; font-size: 1.5rem; font-weight: 600; }
    .card .value small { font-size: 0.85rem; color: var(--muted); font-weight: 400; }
    .card .value.streak { color: var(--good); }
    .card .value.percent { color: var(--accent); }

    .section-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .section-head h2 { margin: 0; font-size: 1.1rem; }

    .edit-toggle {
      border: none;
      background: none;
      color: var(--accent);
      font-weight: 700;
      font-size: 0.8rem;
      cursor: pointer;
      text-decoration: underline;
    }

    .goal-list { display: grid; gap: 8px; }

    .goal {
      display: flex;
      align-items: center;
      gap: 10px;
      width: 100%;
      text-align: left;
      background: white;
      border: 1px solid rgba(46, 52, 94, 0.08);
      border-radius: 14px;
      padding: 12px;
      cursor: pointer;
      font: inherit;
      color: inherit;
    }

    .goal.done { background: var(--accent-soft); border-color: rgba(91, 91, 214, 0.3); }
    .goal.done .title { text-decoration: line-through; opacity: 0.45; }
    .goal .body { flex: 1; }
    .goal .title { font-weight: 600; font-size: 0.92rem; display: block; margin-top: 3px; }

    .goal .mark {
      width: 22px;
      height: 22px;
      border-radius: 50%;
      border: 2px solid rgba(46, 52, 94, 0.15);
      flex: none;
    }

    .goal.done .mark {
      border-color: var(--accent);
      background: var(--accent);
      position: relative;
    }

    .chip {
      display: inline-block;
      font-size: 0.6rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.06em;
      border-radius: 999px;
      padding: 2px 7px;
      margin-right: 3px;
    }

    .chip.Health { background: #ddf3e7; color: #1f7a4d; }
    .chip.Learning { background: #dde9fb; color: #2a5ca8; }
    .chip.Productivity { background: #faeeda; color: #9c6410; }
    .chip.Mindfulness { background: #ecdff7; color: #6b3fa0; }
    .chip.Finance { background: #e2e4fa; color: #3b49a8; }
    .chip.Other { background: #eceef2; color: #596070; }

    .chip.pick {
      cursor: pointer;
      border: 1px solid rgba(46, 52, 94, 0.15);
      background: white;
      color: var(--muted);
    }

    .chip.pick.on { background: var(--accent); border-color: var(--accent); color: white; }

    .editor {
      background: var(--accent-soft);
      border: 1px solid rgba(91, 91, 214, 0.2);
      border-radius: 16px;
      padding: 14px;
      display: grid;
      gap: 10px;
    }

    .editor input[type="text"] {
      width: 100%;
      border: 1px solid rgba(91, 91, 214, 0.3);
      border-radius: 12px;
      padding: 9px 12px;
      font: inherit;
      font-size: 0.9rem;
    }

    .editor .add-btn {
      border: none;
      background: var(--accent);
      color: white;
      border-radius: 12px;
      padding: 10px;
      font-weight: 700;
      font-size: 0.85rem;
      cursor: pointer;
    }

    .editor .add-btn:disabled { opacity: 0.45; cursor: default; }

    .edit-row {
      display: grid;
      gap: 8px;
      background: white;
      border: 1px solid rgba(46, 52, 94, 0.1);
      border-radius: 14px;
      padding: 12px;
    }

    .edit-row .top { display: flex; gap: 8px; align-items: center; }

    .edit-row input {
      flex: 1;
      border: none;
      border-bottom: 1px dashed rgba(46, 52, 94, 0.25);
      font: inherit;
      font-size: 0.9rem;
      font-weight: 600;
      padding: 3px 0;
      outline: none;
    }

    .icon-btn {
      border: 1px solid rgba(46, 52, 94, 0.12);
      background: white;
      border-radius: 10px;
      width: 28px;
      height: 28px;
      cursor: pointer;
      font-size: 0.8rem;
      color: var(--muted);
    }

    .icon-btn.delete:hover { color: #c2403a; border-color: #c2403a; }
    .icon-btn:disabled { opacity: 0.3; cursor: default; }

    .chart {
      background: white;
      border: 1px solid rgba(46, 52, 94, 0.08);
      border-radius: 16px;
      padding: 14px;
    }

    .bars {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      align-items: end;
      gap: 8px;
      height: 150px;
    }

    .bar-wrap { display: grid; gap: 4px; justify-items: center; align-content: end; height: 100%; cursor: pointer; }
    .bar { width: 70%; border-radius: 6px 6px 2px 2px; background: var(--accent); min-height: 3px; }
    .bar.full { background: var(--good); }
    .bar-wrap .day { font-size: 0.65rem; font-weight: 700; color: var(--muted); }
    .bar-wrap .n { font-size: 0.7rem; font-weight: 700; }

    .breakdown { display: grid; }

    .breakdown button {
      display: flex;
      justify-content: space-between;
      align-items: center;
      border: none;
      background: none;
      border-top: 1px solid rgba(46, 52, 94, 0.06);
      padding: 10px 4px;
      font: inherit;
      cursor: pointer;
      color: inherit;
    }

    .breakdown button:first-child { border-top: none; }
    .breakdown .when { text-align: left; }
    .breakdown .when .d { font-weight: 600; font-size: 0.85rem; }
    .breakdown .when .full { color: var(--muted); font-size: 0.7rem; }
    .breakdown .count { font-weight: 700; font-size: 0.85rem; }

    .cal-head, .cal-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .cal-head span {
      text-align: center;
      font-size: 0.65rem;
      font-weight: 700;
      color: var(--muted);
      padding: 4px 0;
    }

    .cal-grid button, .cal-grid .pad {
      height: 44px;
      border-radius: 12px;
      border: 1px solid rgba(46, 52, 94, 0.06);
      background: white;
      font: inherit;
      font-size: 0.75rem;
      cursor: pointer;
      display: grid;
      place-items: center;
      gap: 0;
      color: var(--muted);
    }

    .cal-grid .pad { border: none; background: none; cursor: default; }
    .cal-grid .tier-low { background: var(--good-soft); color: #1f7a4d; font-weight: 700; }
    .cal-grid .tier-mid { background: #9fdfc0; color: #14573a; font-weight: 700; }
    .cal-grid .tier-high { background: var(--good); color: white; font-weight: 700; }
    .cal-grid .tier-activity { background: var(--accent-soft); color: var(--accent); font-weight: 700; }
    .cal-grid button .sub { font-size: 0.55rem; opacity: 0.75; }

    .empty {
      border: 2px dashed rgba(46, 52, 94, 0.15);
      border-radius: 16px;
      padding: 28px;
      text-align: center;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .status { min-height: 1.1em; font-size: 0.8rem; color: var(--muted); }
    .status[data-type="error"] { color: #c2403a; }

    .hidden { display: none !important; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>GoalStride</h1>
      <p class="subtitle" id="header-date"></p>
    </header>

    <div class="tabs" role="tablist">
      <button class="tab active" data-view="track" role="tab">Track</button>
      <button class="tab" data-view="week" role="tab">Week</button>
      <button class="tab" data-view="month" role="tab">Month</button>
    </div>

    <section id="view-track">
      <div class="nav-row">
        <button class="nav-btn" id="day-prev">&#8249;</button>
        <div style="text-align:center">
          <div class="title" id="day-title">Today</div>
          <button class="jump-today hidden" id="day-today">&#8634; Back to Today</button>
        </div>
        <button class="nav-btn" id="day-next">&#8250;</button>
      </div>

      <div class="insight hidden" id="insight-card" style="margin-top:14px">
        <p class="label">AI Insights</p>
        <p id="insight-text"></p>
      </div>

      <div class="cards" id="quick-stats" style="margin-top:14px">
        <div class="card">
          <p class="label">Progress</p>
          <p class="value"><span id="stat-done">0</span> <small>/ <span id="stat-total">0</span></small></p>
        </div>
        <div class="card">
          <p class="label">Current Streak</p>
          <p class="value streak"><span id="stat-streak">0</span> <small>days</small></p>
        </div>
      </div>

      <div class="section-head" style="margin:18px 0 10px">
        <h2 id="list-title">Today's Focus</h2>
        <button class="edit-toggle" id="edit-toggle">+ Edit Goals</button>
      </div>

      <div class="editor hidden" id="editor" style="margin-bottom:12px">
        <input type="text" id="new-title" placeholder="Goal Title..." />
        <div id="new-categories"></div>
        <button class="add-btn" id="add-goal" disabled>Add to List</button>
      </div>

      <div class="goal-list" id="goal-list"></div>
    </section>

    <section id="view-week" class="hidden">
      <div class="nav-row">
        <button class="nav-btn" id="week-prev">&#8249;</button>
        <div style="text-align:center">
          <div class="title">Weekly Progress</div>
          <div class="range" id="week-range"></div>
          <button class="jump-today hidden" id="week-today">&#8634; Today</button>
        </div>
        <button class="nav-btn" id="week-next">&#8250;</button>
      </div>

      <div class="chart" style="margin-top:14px">
        <div class="bars" id="week-bars"></div>
      </div>

      <div class="cards" style="margin-top:12px">
        <div class="card">
          <p class="label">Weekly Total</p>
          <p class="value"><span id="week-total">0</span> <small>actions</small></p>
        </div>
        <div class="card">
          <p class="label">Completion</p>
          <p class="value percent"><span id="week-percent">0</span>%</p>
        </div>
      </div>

      <div class="chart breakdown" id="week-breakdown" style="margin-top:12px"></div>
    </section>

    <section id="view-month" class="hidden">
      <div class="nav-row">
        <button class="nav-btn" id="month-prev">&#8249;</button>
        <div style="text-align:center">
          <div class="title" id="month-title"></div>
          <div class="range" id="month-total-line"></div>
          <button class="jump-today hidden" id="month-today">&#8634; Today</button>
        </div>
        <button class="nav-btn" id="month-next">&#8250;</button>
      </div>

      <div class="cal-head" style="margin-top:14px">
        <span>S</span><span>M</span><span>T</span><span>W</span><span>T</span><span>F</span><span>S</span>
      </div>
      <div class="cal-grid" id="month-grid"></div>

      <div class="cards" style="margin-top:12px">
        <div class="card">
          <p class="label">Monthly Summary</p>
          <p class="value"><span id="month-actions">0</span> <small>achievements</small></p>
        </div>
        <div class="card">
          <p class="label">Completion</p>
          <p class="value percent"><span id="month-percent">0</span>%</p>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const TODAY = '{{TODAY}}';
    const CATEGORIES = ['Health', 'Learning', 'Productivity', 'Mindfulness', 'Finance', 'Other'];
    const MONTH_NAMES = ['January', 'February', 'March', 'April', 'May', 'June',
      'July', 'August', 'September', 'October', 'November', 'December'];

    let activeView = 'track';
    let selectedDate = TODAY;
    let goals = [];
    let daySummary = null;
    let weekEnd = TODAY;
    let [monthYear, monthMonth] = [Number(TODAY.slice(0, 4)), Number(TODAY.slice(5, 7))];
    let editMode = false;
    let newCategories = [];

    const $ = (id) => document.getElementById(id);
    const statusEl = $('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) => text.replace(/[&<>"']/g, (c) => ({
      '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
    }[c]));

    const shiftDate = (dateStr, days) => {
      const d = new Date(dateStr + 'T12:00:00');
      d.setDate(d.getDate() + days);
      return d.toISOString().split('T')[0];
    };

    const prettyDate = (dateStr) =>
      new Date(dateStr + 'T12:00:00').toLocaleDateString('en-US',
        { weekday: 'long', month: 'short', day: 'numeric', year: 'numeric' });

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || ('Request failed: ' + res.status));
      }
      return res.status === 204 ? null : res.json();
    };

    const chips = (cats) =>
      cats.map((c) => `<span class="chip ${c}">${c}</span>`).join('');

    // ---- track view -------------------------------------------------------

    const renderGoals = () => {
      const list = $('goal-list');
      if (!goals.length) {
        list.innerHTML = '<div class="empty">No goals set up yet.</div>';
        return;
      }
      if (editMode) {
        list.innerHTML = goals.map((g, i) => `
          <div class="edit-row" data-id="${g.id}">
            <div class="top">
              <button class="icon-btn" data-move="up" ${i === 0 ? 'disabled' : ''}>&#8593;</button>
              <button class="icon-btn" data-move="down" ${i === goals.length - 1 ? 'disabled' : ''}>&#8595;</button>
              <input value="${escapeHtml(g.title)}" data-edit="title" />
              <button class="icon-btn delete" data-del="1">&#10005;</button>
            </div>
            <div>${CATEGORIES.map((c) =>
              `<span class="chip pick ${g.categories.includes(c) ? 'on' : ''}" data-cat="${c}">${c}</span>`
            ).join('')}</div>
          </div>`).join('');
        wireEditRows();
      } else {
        const done = new Set(daySummary ? daySummary.completed_goal_ids : []);
        list.innerHTML = goals.map((g) => `
          <button class="goal ${done.has(g.id) ? 'done' : ''}" data-id="${g.id}">
            <span class="body">
              <span>${chips(g.categories)}</span>
              <span class="title">${escapeHtml(g.title)}</span>
            </span>
            <span class="mark"></span>
          </button>`).join('');
        list.querySelectorAll('.goal').forEach((btn) => {
          btn.addEventListener('click', () => toggleGoal(btn.dataset.id));
        });
      }
    };

    const wireEditRows = () => {
      $('goal-list').querySelectorAll('.edit-row').forEach((row) => {
        const id = row.dataset.id;
        const index = goals.findIndex((g) => g.id === id);
        row.querySelector('[data-edit="title"]').addEventListener('change', (e) => {
          patchGoal(id, { title: e.target.value });
        });
        row.querySelector('[data-del]').addEventListener('click', () => removeGoal(id));
        row.querySelectorAll('[data-move]').forEach((btn) => {
          btn.addEventListener('click', () => {
            const to = btn.dataset.move === 'up' ? index - 1 : index + 1;
            reorder(index, to);
          });
        });
        row.querySelectorAll('[data-cat]').forEach((chip) => {
          chip.addEventListener('click', () => {
            const goal = goals[index];
            const cat = chip.dataset.cat;
            const next = goal.categories.includes(cat)
              ? goal.categories.filter((c) => c !== cat)
              : goal.categories.concat(cat);
            if (next.length > 0) patchGoal(id, { categories: next });
          });
        });
      });
    };

    const renderTrack = () => {
      const isToday = selectedDate === TODAY;
      $('header-date').textContent = prettyDate(selectedDate);
      $('day-title').textContent = isToday ? 'Today' : prettyDate(selectedDate);
      $('day-today').classList.toggle('hidden', isToday);
      $('day-next').disabled = isToday;
      $('list-title').textContent = editMode
        ? 'Manage Goals'
        : (isToday ? "Today's Focus" : 'Record for ' + prettyDate(selectedDate));
      $('edit-toggle').textContent = editMode ? 'Done' : '+ Edit Goals';
      $('editor').classList.toggle('hidden', !editMode);
      $('quick-stats').classList.toggle('hidden', editMode);
      if (daySummary) {
        $('stat-done').textContent = daySummary.completed_count;
        $('stat-total').textContent = daySummary.goal_count;
        $('stat-streak').textContent = daySummary.streak;
      }
      renderGoals();
    };

    const loadDay = async () => {
      daySummary = await api('/api/day?date=' + selectedDate);
      renderTrack();
    };

    const loadGoals = async () => {
      goals = await api('/api/goals');
      renderTrack();
    };

    const loadInsight = async () => {
      const data = await api('/api/insight');
      $('insight-card').classList.toggle('hidden', !data.insight);
      $('insight-text').textContent = data.insight || '';
    };

    const toggleGoal = async (goalId) => {
      await api('/api/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date: selectedDate, goal_id: goalId })
      });
      await loadDay();
      loadInsight().catch(() => {});
    };

    const patchGoal = async (id, fields) => {
      await api('/api/goals/' + id, {
        method: 'PATCH',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(fields)
      });
      await loadGoals();
    };

    const removeGoal = async (id) => {
      await api('/api/goals/' + id, { method: 'DELETE' });
      await Promise.all([loadGoals(), loadDay()]);
    };

    const reorder = async (from, to) => {
      goals = await api('/api/goals/reorder', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ from, to })
      });
      renderTrack();
    };

    const renderNewCategories = () => {
      $('new-categories').innerHTML = CATEGORIES.map((c) =>
        `<span class="chip pick ${newCategories.includes(c) ? 'on' : ''}" data-cat="${c}">${c}</span>`
      ).join('');
      $('new-categories').querySelectorAll('[data-cat]').forEach((chip) => {
        chip.addEventListener('click', () => {
          const cat = chip.dataset.cat;
          newCategories = newCategories.includes(cat)
            ? newCategories.filter((c) => c !== cat)
            : newCategories.concat(cat);
          renderNewCategories();
          updateAddButton();
        });
      });
    };

    const updateAddButton = () => {
      $('add-goal').disabled = !$('new-title').value.trim() || !newCategories.length;
    };

    const addGoal = async () => {
      await api('/api/goals', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ title: $('new-title').value, categories: newCategories })
      });
      $('new-title').value = '';
      newCategories = [];
      renderNewCategories();
      updateAddButton();
      await loadGoals();
      loadInsight().catch(() => {});
    };

    // ---- week view --------------------------------------------------------

    const renderWeek = (week) => {
      $('week-range').textContent = week.start_date + ' — ' + week.end_date;
      $('week-today').classList.toggle('hidden', weekEnd === TODAY);
      $('week-total').textContent = week.total;
      $('week-percent').textContent = week.percent;

      const max = Math.max(week.goal_count, ...week.days.map((d) => d.count), 1);
      $('week-bars').innerHTML = week.days.map((d) => `
        <div class="bar-wrap" data-date="${d.date}">
          <span class="n">${d.count}</span>
          <div class="bar ${week.goal_count > 0 && d.count === week.goal_count ? 'full' : ''}"
               style="height:${Math.round((d.count / max) * 110)}px"></div>
          <span class="day">${d.label}</span>
        </div>`).join('');

      $('week-breakdown').innerHTML = week.days.map((d) => `
        <button data-date="${d.date}">
          <span class="when">
            <span class="d">${d.label}</span><br/>
            <span class="full">${d.date}</span>
          </span>
          <span class="count">${d.count}</span>
        </button>`).join('');

      document.querySelectorAll('#week-bars [data-date], #week-breakdown [data-date]')
        .forEach((el) => el.addEventListener('click', () => jumpToDate(el.dataset.date)));
    };

    const loadWeek = async () => {
      renderWeek(await api('/api/week?end=' + weekEnd));
    };

    // ---- month view -------------------------------------------------------

    const renderMonth = (month) => {
      const now = new Date(TODAY + 'T12:00:00');
      const isCurrent = month.year === now.getFullYear() && month.month === now.getMonth() + 1;
      $('month-title').textContent = MONTH_NAMES[month.month - 1] + ' ' + month.year;
      $('month-total-line').textContent = month.total_actions + ' total actions this month';
      $('month-today').classList.toggle('hidden', isCurrent);
      $('month-actions').textContent = month.total_actions;
      $('month-percent').textContent = month.percent;

      let cells = '';
      for (let i = 0; i < month.leading_blanks; i++) {
        cells += '<div class="pad"></div>';
      }
      cells += month.days.map((d) => `
        <button class="${d.tier === 'none' ? '' : 'tier-' + d.tier}" data-date="${d.date}">
          <span>${d.day}</span>
          ${d.count > 0 ? `<span class="sub">${d.count}</span>` : ''}
        </button>`).join('');
      $('month-grid').innerHTML = cells;
      $('month-grid').querySelectorAll('[data-date]').forEach((el) =>
        el.addEventListener('click', () => jumpToDate(el.dataset.date)));
    };

    const loadMonth = async () => {
      renderMonth(await api(`/api/month?year=${monthYear}&month=${monthMonth}`));
    };

    // ---- navigation -------------------------------------------------------

    const setView = (view) => {
      activeView = view;
      editMode = false;
      document.querySelectorAll('.tab').forEach((tab) =>
        tab.classList.toggle('active', tab.dataset.view === view));
      $('view-track').classList.toggle('hidden', view !== 'track');
      $('view-week').classList.toggle('hidden', view !== 'week');
      $('view-month').classList.toggle('hidden', view !== 'month');
      refreshView().catch((err) => setStatus(err.message, 'error'));
    };

    const refreshView = async () => {
      if (activeView === 'track') {
        await Promise.all([loadGoals(), loadDay()]);
        loadInsight().catch(() => {});
      } else if (activeView === 'week') {
        await loadWeek();
      } else {
        await loadMonth();
      }
    };

    const jumpToDate = (date) => {
      selectedDate = date;
      setView('track');
    };

    document.querySelectorAll('.tab').forEach((tab) =>
      tab.addEventListener('click', () => setView(tab.dataset.view)));

    $('day-prev').addEventListener('click', () => { selectedDate = shiftDate(selectedDate, -1); loadDay(); });
    $('day-next').addEventListener('click', () => { selectedDate = shiftDate(selectedDate, 1); loadDay(); });
    $('day-today').addEventListener('click', () => { selectedDate = TODAY; loadDay(); });

    $('week-prev').addEventListener('click', () => { weekEnd = shiftDate(weekEnd, -7); loadWeek(); });
    $('week-next').addEventListener('click', () => { weekEnd = shiftDate(weekEnd, 7); loadWeek(); });
    $('week-today').addEventListener('click', () => { weekEnd = TODAY; loadWeek(); });

    const shiftMonth = (delta) => {
      monthMonth += delta;
      if (monthMonth < 1) { monthMonth = 12; monthYear -= 1; }
      if (monthMonth > 12) { monthMonth = 1; monthYear += 1; }
      loadMonth().catch((err) => setStatus(err.message, 'error'));
    };
    $('month-prev').addEventListener('click', () => shiftMonth(-1));
    $('month-next').addEventListener('click', () => shiftMonth(1));
    $('month-today').addEventListener('click', () => {
      monthYear = Number(TODAY.slice(0, 4));
      monthMonth = Number(TODAY.slice(5, 7));
      loadMonth().catch((err) => setStatus(err.message, 'error'));
    });

    $('edit-toggle').addEventListener('click', () => {
      editMode = !editMode;
      renderTrack();
    });
    $('new-title').addEventListener('input', updateAddButton);
    $('add-goal').addEventListener('click', () =>
      addGoal().catch((err) => setStatus(err.message, 'error')));

    renderNewCategories();
    refreshView().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
