pub const CONTENT_STYLES: &str = r#"
/* Page sections */
.page {
  width: 100%;
  max-width: var(--content-width);
  margin: 0 auto;
  padding: calc(var(--header-height) + var(--space-8)) var(--space-6) var(--space-12);
}

.page-header {
  margin-bottom: var(--space-8);
}

.page-title {
  font-size: 2.5rem;
  font-weight: 700;
}

.page-description {
  color: var(--text-secondary);
  margin-top: var(--space-2);
}

.section {
  margin-bottom: var(--space-12);
}

.section-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

/* Rendered markdown */
.markdown h1, .markdown h2, .markdown h3,
.markdown h4, .markdown h5, .markdown h6 {
  margin: var(--space-6) 0;
}

.markdown p {
  margin-bottom: var(--space-4);
}

.markdown ol {
  list-style: decimal;
  margin: var(--space-4) 0 0 var(--space-6);
}

.markdown ul {
  list-style: disc;
  margin: var(--space-4) 0 0 var(--space-6);
}

.markdown li {
  margin-top: var(--space-1);
}

.markdown a {
  color: var(--text-links);
  text-decoration: underline;
}

.markdown code {
  color: var(--text-links);
  font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
}

.markdown pre {
  background-color: var(--navbar);
  padding: var(--space-4);
  border-radius: var(--radius-md);
  overflow-x: auto;
  margin-bottom: var(--space-4);
}

.markdown blockquote {
  border-left: 4px solid var(--text-secondary);
  padding-left: var(--space-4);
  font-style: italic;
  color: var(--text-secondary);
}

/* Projects */
.project-card {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.project-card img {
  width: 100%;
  max-height: 240px;
  object-fit: cover;
  border-radius: var(--radius-md);
}

.project-meta {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.project-buttons {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

/* Resume */
.resume-item {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-4);
}

.resume-item img {
  width: 48px;
  height: 48px;
  border-radius: 50%;
  object-fit: cover;
}

.resume-item .details {
  flex: 1;
}

.resume-item .dimmed {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* Blog */
.post-card {
  cursor: pointer;
}

.post-card:hover {
  box-shadow: var(--shadow-md);
}

.toc {
  margin-bottom: var(--space-8);
}

.toc a {
  color: var(--text-links);
}

.post-nav {
  display: flex;
  justify-content: space-between;
  margin-top: var(--space-8);
}
"#;
