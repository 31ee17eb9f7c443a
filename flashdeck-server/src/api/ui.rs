//! UI Routes - HTML page for the flashdeck web interface
//!
//! Single-page vanilla HTML/CSS/JS (no frameworks); talks to the JSON
//! API with `fetch`.

use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::AppState;

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new().route("/", get(root_page))
}

/// Root page - flashcard list, add form, CSV upload
async fn root_page() -> impl IntoResponse {
    Html(
        r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>flashdeck - Flashcards</title>
    <style>
        body {
            font-family: system-ui, -apple-system, sans-serif;
            max-width: 800px;
            margin: 40px auto;
            padding: 20px;
            line-height: 1.6;
        }
        h1 {
            color: #333;
            border-bottom: 2px solid #0066cc;
            padding-bottom: 10px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
        }
        th, td {
            text-align: left;
            padding: 8px 10px;
            border-bottom: 1px solid #e0e0e0;
        }
        th {
            background: #f5f5f5;
        }
        form {
            background: #f5f5f5;
            padding: 20px;
            border-radius: 4px;
            margin: 20px 0;
        }
        input[type=text], input[type=file] {
            padding: 8px;
            margin: 5px 0;
            width: 100%;
            box-sizing: border-box;
        }
        .button {
            display: inline-block;
            padding: 10px 20px;
            background: #0066cc;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            margin: 10px 0 0 0;
        }
        .button:hover {
            background: #0052a3;
        }
        .status {
            margin: 10px 0;
        }
        .status.error {
            color: #cc0000;
        }
        .status.ok {
            color: #008800;
        }
        ul.errors {
            color: #cc0000;
        }
    </style>
</head>
<body>
    <h1>flashdeck</h1>
    <p>Create, review and bulk-import vocabulary flashcards.</p>

    <h2>Flashcards</h2>
    <table>
        <thead>
            <tr><th>Word</th><th>Translation</th><th>Examples</th></tr>
        </thead>
        <tbody id="cards">
            <tr><td colspan="3">Loading...</td></tr>
        </tbody>
    </table>

    <h2>Add a flashcard</h2>
    <form id="add-form">
        <label>Word <input type="text" id="word" placeholder="casa"></label>
        <label>Translation <input type="text" id="translation" placeholder="house"></label>
        <label>Examples (separate with ;) <input type="text" id="examples" placeholder="Mi casa es grande.; La casa azul"></label>
        <button type="submit" class="button">Add</button>
        <div class="status" id="add-status"></div>
    </form>

    <h2>Import from CSV</h2>
    <p>Upload a CSV with <code>word</code>, <code>translation</code> and optional <code>examples</code> columns.</p>
    <form id="import-form">
        <input type="file" id="file" accept=".csv">
        <button type="submit" class="button">Upload</button>
        <div class="status" id="import-status"></div>
        <ul class="errors" id="import-errors"></ul>
    </form>

    <script>
        const escapeHtml = (text) => {
            const div = document.createElement('div');
            div.textContent = text;
            return div.innerHTML;
        };

        async function loadCards() {
            const tbody = document.getElementById('cards');
            try {
                const response = await fetch('/flashcards');
                const data = await response.json();
                if (data.flashcards.length === 0) {
                    tbody.innerHTML = '<tr><td colspan="3">No flashcards yet.</td></tr>';
                    return;
                }
                tbody.innerHTML = data.flashcards.map((card) =>
                    '<tr><td>' + escapeHtml(card.word) +
                    '</td><td>' + escapeHtml(card.translation) +
                    '</td><td>' + escapeHtml(card.examples.join('; ')) +
                    '</td></tr>'
                ).join('');
            } catch (err) {
                tbody.innerHTML = '<tr><td colspan="3">Failed to load flashcards.</td></tr>';
            }
        }

        document.getElementById('add-form').addEventListener('submit', async (event) => {
            event.preventDefault();
            const status = document.getElementById('add-status');
            const examplesRaw = document.getElementById('examples').value;
            const body = {
                word: document.getElementById('word').value,
                translation: document.getElementById('translation').value,
                examples: examplesRaw === '' ? [] : examplesRaw.split(';').map((s) => s.trim())
            };
            const response = await fetch('/flashcards', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(body)
            });
            const data = await response.json();
            if (response.ok) {
                status.className = 'status ok';
                status.textContent = data.message;
                event.target.reset();
                loadCards();
            } else {
                status.className = 'status error';
                status.textContent = data.error;
            }
        });

        document.getElementById('import-form').addEventListener('submit', async (event) => {
            event.preventDefault();
            const status = document.getElementById('import-status');
            const errorList = document.getElementById('import-errors');
            errorList.innerHTML = '';

            const formData = new FormData();
            const fileInput = document.getElementById('file');
            if (fileInput.files.length > 0) {
                formData.append('file', fileInput.files[0]);
            }

            const response = await fetch('/flashcards/batch', {
                method: 'POST',
                body: formData
            });
            const data = await response.json();
            if (response.ok) {
                status.className = 'status ok';
                status.textContent = data.message;
                errorList.innerHTML = data.errors.map((e) => '<li>' + escapeHtml(e) + '</li>').join('');
                loadCards();
            } else {
                status.className = 'status error';
                status.textContent = data.error;
            }
        });

        loadCards();
    </script>
</body>
</html>
        "#,
    )
}
