//! Global CSS styles for the Kindred app.
//!
//! Light, friendly directory aesthetic: white cards on a grey wash,
//! pill buttons, round avatars.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --blue: #33a0ff;
  --green: #3dcc8e;
  --red: #ff4d61;

  /* SURFACES */
  --white: #ffffff;
  --light-grey: #f0f0f0;
  --light-grey-2: #e6e6e6;
  --page-wash: #f7f8fa;

  /* TEXT */
  --black-75: rgba(0, 0, 0, 0.75);
  --black-40: rgba(0, 0, 0, 0.4);
  --black-20: rgba(0, 0, 0, 0.2);

  /* Typography */
  --font-sans: -apple-system, 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;

  /* Shape */
  --card-radius: 8px;
  --card-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
}

/* === Reset === */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html, body {
  height: 100%;
}

body {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  color: var(--black-75);
  background: var(--page-wash);
  -webkit-font-smoothing: antialiased;
}

a {
  color: var(--blue);
  text-decoration: none;
}

/* === Buttons === */
.kindred-button {
  position: relative;
  display: inline-flex;
  align-items: flex-start;
  justify-content: center;
  border: none;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 600;
  cursor: pointer;
  transition: filter 0.1s ease;
}

.kindred-button:disabled {
  cursor: default;
}

.kindred-button:active:not(:disabled) {
  filter: brightness(0.92);
}

.button-label {
  display: block;
  width: 100%;
  line-height: 1.6;
}

.button-progress {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
}

.progress-spinner {
  width: 18px;
  height: 18px;
  border-radius: 50%;
  border: 2px solid rgba(0, 0, 0, 0.15);
  border-top-color: var(--white);
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Avatars === */
.avatar {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--light-grey-2);
  color: var(--black-40);
  overflow: hidden;
  flex-shrink: 0;
  user-select: none;
}

.avatar-clickable {
  cursor: pointer;
}

.avatar-clickable:hover {
  box-shadow: 0 0 0 3px rgba(51, 160, 255, 0.35);
}

.avatar-initial {
  font-weight: 700;
  color: var(--white);
}

.avatar:has(.avatar-initial) {
  background: var(--blue);
}

.avatar-silhouette {
  width: 70%;
  height: 70%;
}

/* === User Card === */
.user-card {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  background: var(--white);
  border-radius: var(--card-radius);
  box-shadow: var(--card-shadow);
}

.user-card-avatar {
  position: absolute;
  left: 0;
  right: 0;
  display: flex;
  justify-content: center;
}

.user-card-body {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 30px;
  width: 100%;
}

/* === Inputs === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  width: 100%;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--black-40);
}

.input-hint {
  font-weight: 400;
  color: var(--black-20);
}

.input-field {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  color: var(--black-75);
  background: var(--white);
  border: 1px solid var(--light-grey-2);
  border-radius: 6px;
  padding: 0.55rem 0.8rem;
  outline: none;
  width: 100%;
}

.input-field:focus {
  border-color: var(--blue);
}

.input-field::placeholder {
  color: var(--black-20);
}

.input-field:disabled {
  background: var(--light-grey);
  color: var(--black-40);
}

.search-input-wrapper {
  position: relative;
  width: 100%;
}

.search-icon {
  position: absolute;
  left: 0.7rem;
  top: 50%;
  transform: translateY(-50%);
  font-size: var(--text-sm);
  opacity: 0.5;
}

.search-input {
  padding-left: 2.1rem;
}

/* === Nav Header === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
  padding: 0.75rem 1.5rem;
  background: var(--white);
  border-bottom: 1px solid var(--light-grey-2);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-title {
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--blue);
}

.nav-links {
  display: flex;
  gap: 0.5rem;
  flex: 1;
}

.nav-link {
  padding: 0.4rem 0.9rem;
  border-radius: 999px;
  color: var(--black-40);
  font-weight: 600;
  font-size: var(--text-sm);
}

.nav-link:hover {
  background: var(--light-grey);
}

.nav-link-active {
  background: rgba(51, 160, 255, 0.12);
  color: var(--blue);
}

.nav-session {
  display: flex;
  align-items: center;
  gap: 0.9rem;
}

.nav-username {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--black-40);
}

/* === Page Shell === */
.page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.page-body {
  flex: 1;
  width: 100%;
  max-width: 960px;
  margin: 0 auto;
  padding: 2rem 1.5rem 3rem;
}

.page-hint {
  text-align: center;
  color: var(--black-40);
  margin-top: 3rem;
}

.empty-state {
  text-align: center;
  color: var(--black-40);
  padding: 3rem 1rem;
  background: var(--white);
  border-radius: var(--card-radius);
}

/* === Landing === */
.landing {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2.5rem;
  padding: 2rem;
}

.landing-brand {
  text-align: center;
}

.landing-title {
  font-size: var(--text-xl);
  font-weight: 800;
  color: var(--blue);
}

.tagline {
  margin-top: 0.4rem;
  color: var(--black-40);
}

.landing-card {
  width: 380px;
  max-width: 100%;
}

.landing-form {
  display: flex;
  flex-direction: column;
  align-items: stretch;
  gap: 1.1rem;
  width: 100%;
}

.landing-greeting {
  font-size: var(--text-lg);
  font-weight: 700;
  text-align: center;
}

/* === People Page === */
.search-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.search-row .form-field {
  flex: 1;
}

.people-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 4.5rem 1.5rem;
  padding-top: 3.5rem;
}

.person-name {
  font-size: var(--text-lg);
  font-weight: 700;
}

.person-username {
  color: var(--black-40);
  margin-top: 0.15rem;
}

.follows-you-badge {
  margin-top: 0.5rem;
  font-size: var(--text-xs);
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.04em;
  color: var(--green);
  background: rgba(61, 204, 142, 0.12);
  border-radius: 999px;
  padding: 0.2rem 0.6rem;
}

.follow-controls {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.6rem;
  margin-top: 1.2rem;
  min-height: 48px;
}

.result-count {
  color: var(--black-40);
  font-size: var(--text-sm);
  margin-bottom: 0.5rem;
}

/* === Inbox Page === */
.inbox-toolbar {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.inbox-toolbar .search-input-wrapper {
  flex: 1;
}

.inbox-list {
  display: flex;
  flex-direction: column;
  background: var(--white);
  border-radius: var(--card-radius);
  box-shadow: var(--card-shadow);
  overflow: hidden;
}

.inbox-row {
  display: flex;
  align-items: center;
  gap: 0.9rem;
  padding: 0.85rem 1.1rem;
  border-bottom: 1px solid var(--light-grey);
}

.inbox-row:last-child {
  border-bottom: none;
}

.inbox-row:hover {
  background: var(--page-wash);
}

.inbox-row-main {
  flex: 1;
  min-width: 0;
}

.inbox-peer {
  font-weight: 700;
}

.inbox-snippet {
  color: var(--black-40);
  font-size: var(--text-sm);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.inbox-time {
  color: var(--black-20);
  font-size: var(--text-xs);
  flex-shrink: 0;
}

/* === Responsive === */
@media (max-width: 640px) {
  .people-grid {
    grid-template-columns: 1fr;
  }

  .nav-header {
    padding: 0.6rem 0.9rem;
    gap: 0.75rem;
  }

  .page-body {
    padding: 1.25rem 0.9rem 2rem;
  }
}
"#;
