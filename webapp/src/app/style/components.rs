pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: none;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:active {
  transform: translateY(1px);
}

.btn-accent {
  background-color: var(--accent);
  color: #000000;
}

.btn-accent:hover {
  background-color: var(--accent-dark);
  text-decoration: none;
}

.btn-subtle {
  background-color: transparent;
  color: var(--text-primary);
}

/* Cards */
.card {
  background-color: var(--header);
  color: var(--text-primary);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  padding: var(--space-6);
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: var(--space-4);
}

.card-grid.single {
  grid-template-columns: minmax(0, 1fr);
}

/* Badges */
.badge {
  display: inline-block;
  padding: 2px var(--space-2);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  background-color: var(--accent-light);
  color: #000000;
}

.badge.dark {
  background-color: var(--accent);
}

.badge.muted {
  background-color: var(--text-secondary);
  color: var(--background);
}

/* Loading */
.skeleton {
  background: linear-gradient(90deg, rgba(128,128,128,0.15) 25%, rgba(128,128,128,0.3) 50%, rgba(128,128,128,0.15) 75%);
  background-size: 200% 100%;
  animation: skeleton-loading 1.5s infinite;
  border-radius: var(--radius-md);
}

@keyframes skeleton-loading {
  0% { background-position: 200% 0; }
  100% { background-position: -200% 0; }
}

.empty-state {
  color: var(--text-secondary);
  text-align: center;
  padding: var(--space-8);
}

/* Theme toggle */
.theme-toggle {
  display: flex;
  align-items: center;
  justify-content: center;
  border: none;
  border-radius: 50%;
  background-color: var(--header);
  color: var(--text-primary);
  box-shadow: var(--shadow-md);
  cursor: pointer;
  transition: transform 0.2s ease;
}

.theme-toggle:hover {
  transform: scale(1.1);
}
"#;
