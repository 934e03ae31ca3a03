//! Shared stylesheet, injected once from the app root.

pub const APP_STYLES: &str = r#"
/* Base */
* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
    background: #f3f2ef;
    color: #1d2226;
}

button {
    font-family: inherit;
    cursor: pointer;
}

button:disabled {
    cursor: not-allowed;
    opacity: 0.55;
}

/* App shell */
.app {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 16px 48px;
}

.auth-loading {
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 60vh;
    color: #666;
}

.app-header {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    padding: 20px 0 12px;
}

.app-title {
    margin: 0;
    font-size: 26px;
    color: #0a66c2;
}

.app-tagline {
    margin: 4px 0 0;
    font-size: 14px;
    color: #56687a;
}

.header-meta {
    text-align: right;
    font-size: 13px;
}

.user-line {
    display: flex;
    align-items: center;
    gap: 8px;
    justify-content: flex-end;
    color: #1d2226;
}

.admin-badge {
    background: #0a66c2;
    color: #fff;
    border-radius: 10px;
    padding: 1px 8px;
    font-size: 11px;
    font-weight: 600;
}

.link-button {
    background: none;
    border: none;
    color: #0a66c2;
    font-size: 13px;
    padding: 0;
    text-decoration: underline;
}

.health-line {
    margin-top: 6px;
    font-size: 12px;
}

.health-ok {
    color: #1a7f37;
}

.health-bad {
    color: #c0392b;
}

/* Status banner */
.status-banner {
    border-radius: 6px;
    padding: 10px 14px;
    margin: 10px 0;
    font-size: 14px;
    border: 1px solid transparent;
}

.status-error {
    background: #fdecea;
    border-color: #f5c6c2;
    color: #b3261e;
}

.status-success {
    background: #e6f4ea;
    border-color: #bfe4c8;
    color: #1a7f37;
}

.status-info {
    background: #e8f0fe;
    border-color: #c6dafc;
    color: #174ea6;
}

/* Training banner */
.training-banner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    background: #fff8e1;
    border: 1px solid #f0e0a2;
    border-radius: 6px;
    padding: 10px 14px;
    margin: 10px 0;
}

.training-banner-info {
    display: flex;
    align-items: center;
    gap: 10px;
}

.training-banner-title {
    font-weight: 600;
    font-size: 14px;
}

.training-banner-detail {
    font-size: 13px;
    color: #6b5d28;
}

.spinner {
    width: 14px;
    height: 14px;
    border: 2px solid #c9b458;
    border-top-color: transparent;
    border-radius: 50%;
    display: inline-block;
    animation: spin 0.8s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

/* Tabs */
.tab-bar {
    display: flex;
    gap: 4px;
    border-bottom: 1px solid #d6d3cd;
    margin: 14px 0 18px;
}

.tab-button {
    background: none;
    border: none;
    border-bottom: 2px solid transparent;
    padding: 8px 16px;
    font-size: 14px;
    color: #56687a;
}

.tab-button.active {
    color: #0a66c2;
    border-bottom-color: #0a66c2;
    font-weight: 600;
}

.tab-grid {
    display: grid;
    gap: 16px;
}

.tab-grid.two-col {
    grid-template-columns: 280px 1fr;
    align-items: start;
}

.placeholder-panel {
    min-height: 160px;
    display: flex;
    align-items: center;
    justify-content: center;
}

/* Panels and forms */
.panel {
    background: #fff;
    border: 1px solid #e0ddd8;
    border-radius: 8px;
    padding: 18px;
}

.panel-head {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    margin-bottom: 12px;
}

.panel-title {
    margin: 0 0 6px;
    font-size: 18px;
}

.panel-sub {
    margin: 0 0 14px;
    font-size: 13px;
    color: #56687a;
}

.muted {
    color: #8a8a8a;
    font-size: 13px;
}

.form-field {
    margin-bottom: 14px;
}

.form-label {
    display: block;
    font-size: 13px;
    font-weight: 600;
    margin-bottom: 5px;
}

.form-input {
    width: 100%;
    border: 1px solid #c9c6c0;
    border-radius: 5px;
    padding: 8px 10px;
    font-size: 14px;
    font-family: inherit;
}

.form-input:focus {
    outline: 2px solid #0a66c2;
    outline-offset: -1px;
    border-color: #0a66c2;
}

.form-hint {
    margin: 5px 0 0;
    font-size: 12px;
    color: #8a8a8a;
}

.variations-input,
.epochs-input {
    max-width: 110px;
}

.primary-button {
    background: #0a66c2;
    color: #fff;
    border: none;
    border-radius: 18px;
    padding: 9px 20px;
    font-size: 14px;
    font-weight: 600;
}

.primary-button:hover:enabled {
    background: #084d92;
}

/* Drafts layout */
.drafts-layout {
    display: grid;
    grid-template-columns: 320px 1fr;
    gap: 16px;
    align-items: start;
}

.drafts-sidebar {
    background: #fff;
    border: 1px solid #e0ddd8;
    border-radius: 8px;
    padding: 14px;
}

.sidebar-filter {
    margin-bottom: 12px;
}

.sidebar-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 10px;
}

.sidebar-header h2 {
    margin: 0;
    font-size: 16px;
}

.new-draft-button {
    background: #fff;
    border: 1px solid #0a66c2;
    color: #0a66c2;
    border-radius: 14px;
    padding: 3px 12px;
    font-size: 13px;
    font-weight: 600;
}

.draft-list {
    display: flex;
    flex-direction: column;
    gap: 8px;
    max-height: 70vh;
    overflow-y: auto;
}

.draft-card {
    border: 1px solid #e0ddd8;
    border-radius: 6px;
    padding: 10px;
    cursor: pointer;
}

.draft-card:hover {
    border-color: #0a66c2;
}

.draft-card.selected {
    border-color: #0a66c2;
    background: #eef5fc;
}

.draft-card-top {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 6px;
}

.draft-topic {
    font-weight: 600;
    font-size: 14px;
}

.draft-delete {
    background: none;
    border: none;
    color: #8a8a8a;
    font-size: 15px;
    line-height: 1;
    padding: 0 2px;
}

.draft-delete:hover {
    color: #b3261e;
}

.draft-customer {
    font-size: 12px;
    color: #0a66c2;
    margin-top: 2px;
}

.draft-preview {
    margin: 6px 0;
    font-size: 13px;
    color: #56687a;
}

.draft-meta {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 12px;
    color: #8a8a8a;
}

.temp-chip {
    background: #f0eee9;
    border-radius: 8px;
    padding: 0 6px;
    font-size: 11px;
}

.reviewed-badge {
    background: #e6f4ea;
    color: #1a7f37;
    border-radius: 8px;
    padding: 0 6px;
    font-size: 11px;
    font-weight: 600;
}

.draft-panel {
    min-width: 0;
}

.draft-timestamp {
    margin: 0;
    font-size: 12px;
    color: #8a8a8a;
}

.generate-button,
.submit-feedback {
    width: 100%;
    margin-top: 4px;
}

.empty-state {
    background: #fff;
    border: 1px dashed #c9c6c0;
    border-radius: 8px;
    text-align: center;
    padding: 60px 20px;
}

.empty-icon {
    font-size: 34px;
    display: block;
    margin-bottom: 8px;
}

.empty-state h3 {
    margin: 0 0 6px;
}

.empty-state .primary-button {
    width: auto;
    margin-top: 14px;
}

/* Editor */
.editor {
    border: 1px solid #c9c6c0;
    border-radius: 6px;
    overflow: hidden;
}

.editor-toolbar {
    display: flex;
    align-items: center;
    gap: 2px;
    background: #faf9f7;
    border-bottom: 1px solid #e0ddd8;
    padding: 5px 8px;
}

.toolbar-button {
    background: none;
    border: 1px solid transparent;
    border-radius: 4px;
    padding: 3px 8px;
    font-size: 13px;
    color: #1d2226;
}

.toolbar-button:hover:enabled {
    background: #efedea;
}

.toolbar-button.active {
    background: #dce9f7;
    border-color: #0a66c2;
    color: #0a66c2;
}

.toolbar-divider {
    width: 1px;
    height: 18px;
    background: #d6d3cd;
    margin: 0 5px;
}

.toolbar-spacer {
    flex: 1;
}

.char-counter {
    font-size: 12px;
    color: #8a8a8a;
}

.char-counter-warn {
    color: #b26a00;
}

.char-counter-over {
    color: #b3261e;
    font-weight: 600;
}

.editor-surface {
    min-height: 220px;
    padding: 12px 14px;
    font-size: 14px;
    line-height: 1.5;
    outline: none;
}

.editor-surface p {
    margin: 0 0 12px;
}

.editor-surface:empty::before {
    content: attr(data-placeholder);
    color: #a9a59e;
}

.editor-footer {
    margin: 6px 0 0;
    font-size: 12px;
    color: #8a8a8a;
}

/* Comment modal */
.modal-overlay {
    position: fixed;
    inset: 0;
    background: rgba(29, 34, 38, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 20;
}

.comment-modal {
    background: #fff;
    border-radius: 8px;
    width: min(440px, 90vw);
    padding: 18px;
}

.modal-title {
    margin: 0 0 10px;
    font-size: 16px;
}

.modal-quote {
    background: #fff8e1;
    border-left: 3px solid #c9b458;
    padding: 8px 10px;
    font-size: 13px;
    margin-bottom: 10px;
}

.modal-quote-label {
    font-weight: 600;
    margin-right: 4px;
}

.modal-input {
    width: 100%;
    border: 1px solid #c9c6c0;
    border-radius: 5px;
    padding: 8px 10px;
    font-size: 14px;
    font-family: inherit;
    resize: vertical;
}

.modal-actions {
    display: flex;
    justify-content: flex-end;
    gap: 8px;
    margin-top: 12px;
}

.modal-cancel {
    background: #fff;
    border: 1px solid #c9c6c0;
    border-radius: 14px;
    padding: 6px 14px;
    font-size: 13px;
}

.modal-confirm {
    background: #0a66c2;
    color: #fff;
    border: none;
    border-radius: 14px;
    padding: 6px 14px;
    font-size: 13px;
    font-weight: 600;
}

/* Inline comments */
.inline-comments {
    border-top: 1px solid #e0ddd8;
    background: #faf9f7;
    padding: 10px 14px;
}

.inline-comments-title {
    margin: 0 0 8px;
    font-size: 13px;
}

.inline-comment-list {
    display: flex;
    flex-direction: column;
    gap: 6px;
}

.inline-comment {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 8px;
    background: #fff8e1;
    border-radius: 5px;
    padding: 6px 8px;
    font-size: 13px;
}

.inline-comment-body {
    flex: 1;
}

.inline-comment-quote {
    color: #6b5d28;
    font-style: italic;
}

.inline-comment-text {
    margin: 2px 0 0;
}

.inline-comment-remove {
    background: none;
    border: none;
    color: #8a8a8a;
    font-size: 14px;
    line-height: 1;
}

/* Feedback controls */
.diff-toggle {
    margin-bottom: 10px;
}

.diff-box {
    background: #faf9f7;
    border: 1px solid #e0ddd8;
    border-radius: 6px;
    padding: 12px;
    margin-bottom: 14px;
}

.comment-input-row {
    display: flex;
    gap: 8px;
}

.add-comment-button {
    background: #fff;
    border: 1px solid #0a66c2;
    color: #0a66c2;
    border-radius: 14px;
    padding: 6px 16px;
    font-size: 13px;
    font-weight: 600;
}

.comment-chips {
    display: flex;
    flex-wrap: wrap;
    gap: 6px;
    margin-top: 8px;
}

.comment-chip {
    display: inline-flex;
    align-items: center;
    gap: 5px;
    background: #fff8e1;
    border: 1px solid #f0e0a2;
    border-radius: 12px;
    padding: 3px 10px;
    font-size: 13px;
}

.chip-remove {
    background: none;
    border: none;
    color: #8a8a8a;
    font-size: 13px;
    line-height: 1;
    padding: 0;
}

.rating-row {
    display: flex;
    gap: 8px;
}

.rating-button {
    background: #fff;
    border: 1px solid #c9c6c0;
    border-radius: 16px;
    padding: 7px 16px;
    font-size: 13px;
}

.rating-button.like.active {
    background: #e6f4ea;
    border-color: #1a7f37;
    color: #1a7f37;
}

.rating-button.dislike.active {
    background: #fdecea;
    border-color: #b3261e;
    color: #b3261e;
}

/* Diff view */
.diff-empty {
    font-size: 13px;
    color: #8a8a8a;
}

.diff-view {
    font-size: 13px;
}

.diff-legend {
    display: flex;
    gap: 14px;
    margin-bottom: 8px;
    font-size: 12px;
    color: #56687a;
}

.diff-legend-swatch {
    display: inline-block;
    width: 10px;
    height: 10px;
    border-radius: 2px;
    margin-right: 4px;
}

.diff-legend-removed {
    background: #fdd;
}

.diff-legend-added {
    background: #dfd;
}

.diff-content {
    white-space: pre-wrap;
    line-height: 1.6;
}

.diff-removed {
    background: #fdd;
    color: #8b1a10;
    text-decoration: line-through;
}

.diff-added {
    background: #dfd;
    color: #1a5c2a;
}

.diff-stats {
    display: flex;
    gap: 12px;
    margin-top: 8px;
    font-size: 12px;
}

.diff-stat-removed {
    color: #b3261e;
}

.diff-stat-added {
    color: #1a7f37;
}

/* Customer picker */
.customer-card-list {
    display: flex;
    flex-direction: column;
    gap: 8px;
    max-height: 60vh;
    overflow-y: auto;
}

.customer-card {
    border: 1px solid #e0ddd8;
    border-radius: 6px;
    padding: 10px;
    cursor: pointer;
}

.customer-card:hover {
    border-color: #0a66c2;
}

.customer-card.selected {
    border-color: #0a66c2;
    background: #eef5fc;
}

.customer-card-name {
    font-weight: 600;
    font-size: 14px;
}

.customer-card-email {
    font-size: 12px;
    color: #56687a;
}

.customer-card-drafts {
    font-size: 12px;
    color: #8a8a8a;
    margin-top: 2px;
}

/* Training panel */
.train-error {
    display: flex;
    align-items: center;
    justify-content: space-between;
    background: #fdecea;
    border: 1px solid #f5c6c2;
    color: #b3261e;
    border-radius: 6px;
    padding: 8px 12px;
    font-size: 13px;
    margin-bottom: 12px;
}

.dismiss-button {
    background: none;
    border: none;
    color: inherit;
    font-size: 14px;
    padding: 0 2px;
}

.training-stats {
    background: #faf9f7;
    border: 1px solid #e0ddd8;
    border-radius: 6px;
    padding: 12px;
    margin-bottom: 14px;
}

.stat-line {
    display: flex;
    justify-content: space-between;
    font-size: 13px;
    padding: 3px 0;
}

.stat-label {
    color: #56687a;
}

.stat-value {
    font-weight: 600;
}

.threshold-notice {
    margin: 6px 0 2px;
    font-size: 13px;
    color: #b26a00;
}

.recent-feedback {
    margin-bottom: 14px;
}

.recent-feedback h4 {
    margin: 0 0 6px;
    font-size: 13px;
}

.feedback-snippet {
    margin: 4px 0;
    font-size: 12px;
    color: #56687a;
    font-style: italic;
}

.advanced-options {
    margin-bottom: 14px;
}

.advanced-fields {
    margin-top: 10px;
}

.training-progress {
    display: flex;
    align-items: center;
    gap: 8px;
    background: #e8f0fe;
    border: 1px solid #c6dafc;
    color: #174ea6;
    border-radius: 6px;
    padding: 8px 12px;
    font-size: 13px;
    margin-bottom: 12px;
}

.train-button {
    width: 100%;
    background: #0a66c2;
    color: #fff;
    border: none;
    border-radius: 18px;
    padding: 9px 20px;
    font-size: 14px;
    font-weight: 600;
}

.adapter-history {
    margin-top: 18px;
}

.adapter-history h4 {
    margin: 0 0 8px;
    font-size: 14px;
}

.adapter-list {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.adapter-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    border: 1px solid #e0ddd8;
    border-radius: 6px;
    padding: 10px;
}

.adapter-row.active {
    border-color: #1a7f37;
    background: #f3faf5;
}

.adapter-version {
    display: flex;
    align-items: center;
    gap: 8px;
    font-weight: 600;
    font-size: 14px;
}

.active-badge {
    background: #1a7f37;
    color: #fff;
    border-radius: 10px;
    padding: 1px 8px;
    font-size: 11px;
}

.adapter-meta,
.adapter-date {
    font-size: 12px;
    color: #8a8a8a;
}

.activate-button {
    background: #fff;
    border: 1px solid #0a66c2;
    color: #0a66c2;
    border-radius: 14px;
    padding: 4px 14px;
    font-size: 13px;
    font-weight: 600;
}

/* Adapter options */
.adapter-empty p {
    margin: 4px 0;
}

.adapter-options {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.adapter-option {
    display: flex;
    align-items: center;
    gap: 12px;
    border: 1px solid #e0ddd8;
    border-radius: 6px;
    padding: 12px;
    cursor: pointer;
}

.adapter-option:hover {
    border-color: #0a66c2;
}

.adapter-option.selected {
    border-color: #0a66c2;
    background: #eef5fc;
}

.radio-dot {
    width: 16px;
    height: 16px;
    border: 2px solid #c9c6c0;
    border-radius: 50%;
    flex-shrink: 0;
}

.radio-dot.checked {
    border-color: #0a66c2;
    background: radial-gradient(circle, #0a66c2 44%, #fff 50%);
}

.adapter-option-body {
    flex: 1;
}

.adapter-option-title {
    font-weight: 600;
    font-size: 14px;
}

.adapter-option-meta {
    font-size: 12px;
    color: #8a8a8a;
}

/* Landing */
.landing {
    min-height: 100vh;
    background: linear-gradient(160deg, #0b1f35 0%, #12324f 55%, #1b2440 100%);
    color: #e8eef5;
}

.landing-nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    max-width: 1100px;
    margin: 0 auto;
    padding: 20px 24px;
}

.landing-brand {
    display: flex;
    align-items: center;
    gap: 10px;
}

.brand-mark {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 34px;
    height: 34px;
    border-radius: 8px;
    background: #0a66c2;
    color: #fff;
    font-weight: 700;
    font-size: 18px;
}

.brand-mark-small {
    width: 24px;
    height: 24px;
    font-size: 13px;
}

.brand-name {
    font-size: 19px;
    font-weight: 700;
}

.landing-signin {
    background: none;
    border: 1px solid #5a7a9a;
    color: #e8eef5;
    border-radius: 16px;
    padding: 7px 18px;
    font-size: 14px;
}

.landing-signin:hover {
    border-color: #9ec2e6;
}

.landing-hero {
    max-width: 760px;
    margin: 0 auto;
    text-align: center;
    padding: 70px 24px 50px;
}

.hero-pill {
    display: inline-block;
    background: rgba(10, 102, 194, 0.25);
    border: 1px solid rgba(120, 170, 220, 0.4);
    border-radius: 14px;
    padding: 4px 14px;
    font-size: 13px;
    margin-bottom: 22px;
}

.hero-title {
    font-size: 44px;
    line-height: 1.15;
    margin: 0 0 18px;
}

.hero-accent {
    color: #6db3f2;
}

.hero-tagline {
    font-size: 17px;
    color: #b6c6d6;
    margin: 0 0 26px;
}

.landing-error {
    background: rgba(179, 38, 30, 0.2);
    border: 1px solid rgba(230, 120, 110, 0.5);
    color: #ffb4ab;
    border-radius: 6px;
    padding: 10px 14px;
    margin: 0 auto 20px;
    max-width: 440px;
    font-size: 14px;
}

.hero-cta {
    background: #0a66c2;
    color: #fff;
    border: none;
    border-radius: 22px;
    padding: 12px 30px;
    font-size: 16px;
    font-weight: 600;
}

.hero-cta:hover {
    background: #1373cf;
}

.landing-steps {
    max-width: 1000px;
    margin: 0 auto;
    text-align: center;
    padding: 40px 24px;
}

.landing-steps h2 {
    margin: 0 0 8px;
}

.section-sub {
    color: #b6c6d6;
    margin: 0 0 26px;
}

.step-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 18px;
}

.step-card {
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.12);
    border-radius: 10px;
    padding: 22px;
    text-align: left;
}

.step-card h3 {
    margin: 12px 0 8px;
}

.step-card p {
    margin: 0;
    color: #b6c6d6;
    font-size: 14px;
}

.step-number {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 32px;
    height: 32px;
    border-radius: 50%;
    font-weight: 700;
}

.step-blue { background: #0a66c2; }
.step-purple { background: #6e4bc2; }
.step-green { background: #1a7f37; }

.landing-features {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 30px;
    max-width: 1000px;
    margin: 0 auto;
    padding: 40px 24px;
    align-items: center;
}

.feature-column h2 {
    margin: 0 0 18px;
}

.feature-item {
    display: flex;
    gap: 10px;
    margin-bottom: 14px;
    color: #d5e0ea;
    font-size: 15px;
}

.feature-icon {
    flex-shrink: 0;
}

.code-card {
    background: #0d1117;
    border: 1px solid rgba(255, 255, 255, 0.12);
    border-radius: 10px;
    padding: 14px 16px;
    font-family: 'SF Mono', ui-monospace, Menlo, monospace;
    font-size: 13px;
}

.window-dots {
    display: flex;
    gap: 6px;
    margin-bottom: 12px;
}

.window-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
}

.dot-red { background: #ff5f56; }
.dot-yellow { background: #ffbd2e; }
.dot-green { background: #27c93f; }

.code-lines {
    display: flex;
    flex-direction: column;
    gap: 5px;
    white-space: pre;
}

.code-dim { color: #8b949e; }
.code-purple { color: #bc8cff; }
.code-red { color: #ff7b72; }
.code-green { color: #7ee787; }
.code-blue { color: #79c0ff; }
.code-train { color: #e3b341; }

.landing-cta {
    max-width: 760px;
    margin: 0 auto;
    padding: 40px 24px 60px;
}

.cta-card {
    background: rgba(10, 102, 194, 0.18);
    border: 1px solid rgba(120, 170, 220, 0.35);
    border-radius: 12px;
    text-align: center;
    padding: 40px 24px;
}

.cta-card h2 {
    margin: 0 0 8px;
}

.cta-card p {
    color: #b6c6d6;
    margin: 0 0 22px;
}

.cta-button {
    background: #fff;
    color: #0b1f35;
    border: none;
    border-radius: 22px;
    padding: 12px 30px;
    font-size: 16px;
    font-weight: 600;
}

.landing-footer {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    border-top: 1px solid rgba(255, 255, 255, 0.12);
    padding: 20px;
    color: #8ba0b5;
    font-size: 13px;
}

.footer-name {
    color: #e8eef5;
    font-weight: 600;
}

/* Responsive */
@media (max-width: 860px) {
    .drafts-layout,
    .tab-grid.two-col,
    .landing-features {
        grid-template-columns: 1fr;
    }

    .step-grid {
        grid-template-columns: 1fr;
    }

    .hero-title {
        font-size: 32px;
    }
}
"#;
