mod config_file_overrides_contract;
mod install_failure_aborts_contract;
mod mirrors_build_output_contract;
mod second_run_is_idempotent_contract;
