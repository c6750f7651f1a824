//! Dashboard page route.
//!
//! Serves the whole browser-side client as one inline HTML document at `/`.
//! The page is an external collaborator of the API: it buffers drag
//! reordering in memory and only flushes to `/api/reorder` when a drag
//! ends, so displayed order between saves is ahead of the store.

use axum::response::Html;

/// `GET /` — the dashboard single page.
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

const DASHBOARD_PAGE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width,initial-scale=1"/>
  <title>navdeck</title>
  <style>
    :root{--bg:#0f172a;--muted:#94a3b8;--accent:#2563eb}
    html,body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;color:#e6eef8;background:linear-gradient(180deg,#071029 0%,#021025 100%);min-height:100vh}
    .wrap{max-width:1100px;margin:24px auto;padding:16px}
    header{display:flex;gap:12px;align-items:center;justify-content:space-between;flex-wrap:wrap}
    h1{font-size:18px;margin:0}
    input,select{padding:8px 10px;border-radius:8px;border:1px solid rgba(255,255,255,.08);background:rgba(255,255,255,.03);color:inherit}
    button{padding:8px 10px;border-radius:8px;border:none;background:var(--accent);color:#fff;cursor:pointer}
    button.ghost{background:rgba(255,255,255,.08)}
    .row{display:flex;gap:8px;flex-wrap:wrap;margin:12px 0;align-items:center}
    .group-title{margin:18px 0 6px;font-size:13px;color:var(--muted);text-transform:uppercase;letter-spacing:.08em}
    .grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:12px}
    .card{background:rgba(255,255,255,.02);border-radius:12px;padding:12px;display:flex;flex-direction:column;gap:8px;cursor:grab}
    .card.dragging{opacity:.4}
    .stripe{width:10px;height:40px;border-radius:6px;flex:none}
    .card a{color:inherit;text-decoration:none;font-weight:600}
    .meta{font-size:12px;color:var(--muted);overflow:hidden;text-overflow:ellipsis}
    .tag{display:inline-block;padding:3px 8px;border-radius:999px;background:rgba(255,255,255,.05);font-size:12px;margin-right:4px}
    .actions{display:flex;gap:6px;margin-top:auto}
    .actions button{font-size:12px;padding:5px 8px}
    .footer{margin-top:18px;color:var(--muted);font-size:13px}
  </style>
</head>
<body>
<div class="wrap">
  <header>
    <h1>navdeck</h1>
    <div class="row">
      <input id="token" type="password" placeholder="admin token"/>
      <button id="add">Add card</button>
      <button id="reset" class="ghost">Reset board</button>
    </div>
  </header>

  <div class="row">
    <input id="q" type="text" placeholder="Search the web" style="flex:1;min-width:180px"/>
    <select id="engine">
      <option value="google">Google</option>
      <option value="bing">Bing</option>
      <option value="baidu">Baidu</option>
    </select>
    <label style="color:var(--muted);font-size:13px"><input id="siteOnly" type="checkbox"/> this site only</label>
    <button id="go">Search</button>
  </div>

  <div id="board"></div>

  <div class="footer">Drag cards to reorder; the new order is saved when the drag ends.</div>
</div>

<script>
const API = '/api';
let cards = [];
let groups = [];

const tokenInput = document.getElementById('token');
tokenInput.value = localStorage.getItem('navdeck-token') || '';
tokenInput.addEventListener('change', () => localStorage.setItem('navdeck-token', tokenInput.value));

const authed = (opts = {}) => ({
  ...opts,
  headers: { 'content-type': 'application/json', 'authorization': 'Bearer ' + tokenInput.value, ...(opts.headers || {}) },
});

async function load() {
  [cards, groups] = await Promise.all([
    fetch(API + '/cards').then(r => r.json()),
    fetch(API + '/groups').then(r => r.json()),
  ]);
  render();
}

function esc(s) {
  return (s || '').replace(/[&<>"']/g, c => ({'&':'&amp;','<':'&lt;','>':'&gt;','"':'&quot;',"'":'&#39;'}[c]));
}

function cardEl(it) {
  const el = document.createElement('div');
  el.className = 'card';
  el.draggable = true;
  el.dataset.id = it.id;
  el.innerHTML = `
    <div style="display:flex;align-items:center;gap:10px">
      <div class="stripe" style="background:${esc(it.color)}"></div>
      <div style="flex:1;min-width:0">
        <div><a href="${esc(it.url)}" target="_blank" rel="noopener">${esc(it.title)}</a></div>
        <div class="meta">${esc(it.desc || it.url)}</div>
      </div>
    </div>
    <div>${(it.tags || []).map(t => `<span class="tag">${esc(t)}</span>`).join('')}</div>`;
  const actions = document.createElement('div');
  actions.className = 'actions';
  const edit = document.createElement('button');
  edit.textContent = 'Edit';
  edit.onclick = () => editCard(it);
  const del = document.createElement('button');
  del.textContent = 'Delete';
  del.className = 'ghost';
  del.onclick = () => deleteCard(it.id);
  actions.append(edit, del);
  el.append(actions);

  el.addEventListener('dragstart', () => el.classList.add('dragging'));
  el.addEventListener('dragend', async () => {
    el.classList.remove('dragging');
    const ids = [...document.querySelectorAll('.card')].map(c => c.dataset.id);
    await fetch(API + '/reorder', authed({ method: 'POST', body: JSON.stringify({ ids }) }));
  });
  return el;
}

function render() {
  const board = document.getElementById('board');
  board.innerHTML = '';
  const named = groups.filter(g => cards.some(c => c.group === g));
  const sections = [...named, null];
  for (const g of sections) {
    const members = cards.filter(c => (g === null ? !named.includes(c.group) : c.group === g));
    if (!members.length) continue;
    if (g !== null || named.length) {
      const title = document.createElement('div');
      title.className = 'group-title';
      title.textContent = g === null ? 'Ungrouped' : g;
      board.append(title);
    }
    const grid = document.createElement('div');
    grid.className = 'grid';
    for (const it of members) grid.append(cardEl(it));
    grid.addEventListener('dragover', e => {
      e.preventDefault();
      const dragging = document.querySelector('.card.dragging');
      if (!dragging) return;
      const after = [...grid.querySelectorAll('.card:not(.dragging)')]
        .find(c => e.clientY < c.getBoundingClientRect().top + c.offsetHeight / 2);
      after ? grid.insertBefore(dragging, after) : grid.append(dragging);
    });
    board.append(grid);
  }
}

async function editCard(it) {
  const title = prompt('Title', it.title); if (title === null) return;
  const url = prompt('URL', it.url); if (url === null) return;
  const res = await fetch(API + '/update', authed({ method: 'PUT', body: JSON.stringify({ id: it.id, title, url }) }));
  if (!res.ok) return alert('update failed: ' + res.status);
  load();
}

async function deleteCard(id) {
  if (!confirm('Delete this card?')) return;
  const res = await fetch(API + '/delete', authed({ method: 'DELETE', body: JSON.stringify({ id }) }));
  if (!res.ok) return alert('delete failed: ' + res.status);
  load();
}

document.getElementById('add').onclick = async () => {
  const title = prompt('Title'); if (title === null) return;
  const url = prompt('URL', 'https://'); if (url === null) return;
  const group = prompt('Group (empty for none)', groups[0] || '') || null;
  const res = await fetch(API + '/cards', authed({ method: 'POST', body: JSON.stringify({ title, url, group }) }));
  if (!res.ok) return alert('add failed: ' + res.status);
  load();
};

document.getElementById('reset').onclick = async () => {
  if (!confirm('Reset the board to the example cards?')) return;
  const res = await fetch(API + '/reset', authed({ method: 'POST' }));
  if (!res.ok) return alert('reset failed: ' + res.status);
  load();
};

document.getElementById('go').onclick = () => {
  const q = document.getElementById('q').value.trim();
  if (!q) return;
  const engine = document.getElementById('engine').value;
  const site = document.getElementById('siteOnly').checked ? '&site=' + encodeURIComponent(location.hostname) : '';
  window.open('/search?q=' + encodeURIComponent(q) + '&engine=' + engine + site, '_blank');
};

load();
</script>
</body>
</html>
"##;
