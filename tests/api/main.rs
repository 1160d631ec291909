mod remote_action;
mod save_email;

// every test gets its own server (random port) and its own store directory
// (random name under the system temp dir), so tests can run in parallel and
// never see each other's records
