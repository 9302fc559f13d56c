use crate::models::StatsResponse;

pub fn render_index(today: &str, stats: &StatsResponse) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", today)
        .replace("{{CURRENT}}", &format!("{:.1}", stats.current_weight))
        .replace("{{START}}", &format!("{:.1}", stats.start_weight))
        .replace("{{LOSS}}", &signed(stats.current_weight - stats.start_weight))
        .replace("{{TREND}}", &signed(stats.weight_trend))
}

// Matches the page script's formatting: explicit plus on gains, no sign on 0.
fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.1}")
    } else {
        format!("{value:.1}")
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weight Tracker</title>
  <style>
    :root {
      --bg-1: #eef6f4;
      --bg-2: #d7ebe3;
      --ink: #22302c;
      --accent: #2f8f6f;
      --accent-2: #28566b;
      --down: #2d7a4b;
      --up: #c63b2b;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 20px 48px rgba(40, 86, 107, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top right, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #f4faf7 65%, #e9f3ee 100%);
      color: var(--ink);
      font-family: "Avenir Next", "Segoe UI", sans-serif;
      display: grid;
      place-items: center;
      padding: 30px 16px 44px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      font-weight: 650;
    }

    header .subtitle {
      margin: 6px 0 0;
      color: #5c6b66;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(40, 86, 107, 0.1);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7b8782;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 650;
      color: var(--accent-2);
    }

    .stat .value.trend-down {
      color: var(--down);
    }

    .stat .value.trend-up {
      color: var(--up);
    }

    .chart-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(40, 86, 107, 0.1);
    }

    .chart-card h2 {
      margin: 0 0 12px;
      font-size: 1.25rem;
    }

    #chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(40, 86, 107, 0.12);
    }

    .chart-label {
      fill: #76817c;
      font-size: 11px;
      font-family: inherit;
    }

    form.entry {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
      align-items: end;
    }

    form.entry label {
      display: grid;
      gap: 5px;
      font-size: 0.85rem;
      color: #5c6b66;
    }

    input {
      border: 1px solid rgba(40, 86, 107, 0.25);
      border-radius: 10px;
      padding: 11px 12px;
      font-size: 1rem;
      font-family: inherit;
    }

    input:focus {
      outline: 2px solid var(--accent);
      border-color: transparent;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 13px 18px;
      font-size: 1rem;
      font-weight: 650;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 22px rgba(47, 143, 111, 0.3);
      transition: transform 140ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .status {
      font-size: 0.95rem;
      color: #5c6b66;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--up);
    }

    .status[data-type="ok"] {
      color: var(--down);
    }

    .hint {
      margin: 0;
      color: #6d7873;
      font-size: 0.88rem;
    }

    @media (max-width: 600px) {
      .app {
        padding: 26px 20px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Weight Tracker</h1>
      <p class="subtitle">Weekly weigh-ins with medication dose, plotted over time.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Current weight</span>
        <span id="current" class="value">{{CURRENT}} kg</span>
      </div>
      <div class="stat">
        <span class="label">Start weight</span>
        <span id="start" class="value">{{START}} kg</span>
      </div>
      <div class="stat">
        <span class="label">Total change</span>
        <span id="loss" class="value">{{LOSS}} kg</span>
      </div>
      <div class="stat">
        <span class="label">Since last entry</span>
        <span id="trend" class="value">{{TREND}} kg</span>
      </div>
    </section>

    <section class="chart-card">
      <h2>Weight over time</h2>
      <svg id="chart" viewBox="0 0 640 280" aria-label="Weight chart" role="img"></svg>
    </section>

    <form class="entry" id="entry-form" method="post" action="/entries/add">
      <label>Weight (kg)
        <input name="weight" id="weight" inputmode="decimal" placeholder="148.5" />
      </label>
      <label>Date
        <input name="date" id="date" value="{{TODAY}}" placeholder="DD.MM.YYYY" />
      </label>
      <label>Dose (mg)
        <input name="dose" id="dose" inputmode="decimal" placeholder="2.5" />
      </label>
      <button type="submit">Add entry</button>
    </form>

    <div class="status" id="status"></div>
    <p class="hint">Entries live for this session only. Dose is optional and defaults to 0 mg.</p>
  </main>

  <script>
    const chartEl = document.getElementById('chart');
    const statusEl = document.getElementById('status');
    const form = document.getElementById('entry-form');
    const tiles = {
      current: document.getElementById('current'),
      start: document.getElementById('start'),
      loss: document.getElementById('loss'),
      trend: document.getElementById('trend')
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const signed = (value) => (value > 0 ? '+' : '') + value.toFixed(1);

    const updateTiles = (stats) => {
      tiles.current.textContent = stats.current_weight.toFixed(1) + ' kg';
      tiles.start.textContent = stats.start_weight.toFixed(1) + ' kg';
      tiles.loss.textContent = signed(-stats.total_loss) + ' kg';
      tiles.trend.textContent = signed(stats.weight_trend) + ' kg';
      tiles.trend.className = 'value ' +
        (stats.weight_trend > 0 ? 'trend-up' : stats.weight_trend < 0 ? 'trend-down' : '');
      tiles.loss.className = 'value ' +
        (stats.total_loss > 0 ? 'trend-down' : stats.total_loss < 0 ? 'trend-up' : '');
    };

    const renderChart = (entries) => {
      if (!entries.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No entries yet</text>';
        return;
      }

      const width = 640;
      const height = 280;
      const paddingX = 46;
      const paddingY = 36;
      const top = 22;

      const weights = entries.map((entry) => entry.weight);
      let min = Math.min(...weights) - 2;
      let max = Math.max(...weights) + 2;

      const range = max - min;
      const xStep = entries.length > 1 ? (width - paddingX * 2) / (entries.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (weight) => height - paddingY - (weight - min) * scaleY;

      const path = entries
        .map((entry, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(entry.weight).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${value.toFixed(1)}</text>`;
      }

      const labelEvery = entries.length > 10 ? 2 : 1;
      const xLabels = entries
        .map((entry, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">T${entry.week}</text>`;
        })
        .join('');

      const points = entries
        .map((entry, index) => {
          const tooltip = `${entry.weight} kg · ${entry.date} · ${entry.dose} mg`;
          return `<circle class="chart-point" cx="${x(index)}" cy="${y(entry.weight)}" r="4"><title>${tooltip}</title></circle>`;
        })
        .join('');

      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${points}${xLabels}`;
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      updateTiles(await res.json());
    };

    const loadEntries = async () => {
      const res = await fetch('/api/entries');
      if (!res.ok) {
        throw new Error('Unable to load entries');
      }
      const body = await res.json();
      renderChart(body.entries);
    };

    const refresh = async () => {
      await Promise.all([loadStats(), loadEntries()]);
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {
        weight: document.getElementById('weight').value,
        date: document.getElementById('date').value,
        dose: document.getElementById('dose').value
      };

      (async () => {
        setStatus('Saving...', '');
        const res = await fetch('/api/entries', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(payload)
        });
        const body = await res.json();

        if (!res.ok) {
          setStatus(body.message || 'Entry rejected', 'error');
          return;
        }

        form.reset();
        setStatus(body.notice.message, 'ok');
        await refresh();
        setTimeout(() => setStatus('', ''), 2500);
      })().catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_index_fills_every_placeholder() {
        let stats = StatsResponse {
            current_weight: 148.0,
            start_weight: 150.0,
            total_loss: 2.0,
            weight_trend: -1.0,
            entry_count: 3,
        };
        let page = render_index("25.11.2024", &stats);
        assert!(!page.contains("{{"));
        assert!(page.contains("148.0 kg"));
        assert!(page.contains("150.0 kg"));
        assert!(page.contains("-2.0 kg"));
        assert!(page.contains("-1.0 kg"));
        assert!(page.contains("value=\"25.11.2024\""));
    }
}
