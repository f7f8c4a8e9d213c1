pub mod trip_plan_input;
