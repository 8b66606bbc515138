use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in English dictionary used whenever a language file is missing a key
/// or cannot be loaded at all.
pub static DEFAULT_TRANSLATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("app_name", "ASHA EHR"),
        ("dashboard", "Dashboard"),
        ("patients", "Patients"),
        ("reminders", "Reminders"),
        ("reports", "Reports"),
        ("profile", "Profile"),
        ("logout", "Logout"),
        ("english", "English"),
        ("hindi", "Hindi"),
        ("marathi", "Marathi"),
        ("punjabi", "Punjabi"),
        ("bengali", "Bengali"),
        ("personal_information", "Personal Information"),
        ("view_your_details", "View your details"),
        ("contact", "Contact"),
        ("language", "Language"),
        ("sync_status", "Sync Status"),
        ("privacy_security", "Privacy & Security"),
        ("manage_permissions", "Manage Permissions"),
        ("help_support", "Help & Support"),
        ("faqs_contact", "FAQs & Contact"),
        ("about", "About"),
        ("app_version", "App Version"),
        ("user_id", "User ID"),
        ("name", "Name"),
        ("role", "Role"),
        ("password", "Password"),
        ("login", "Login"),
        ("phc_login", "PHC Supervisor Login"),
        ("welcome_user", "Welcome, %s"),
        ("total_patients", "Total Patients"),
        ("today_visits", "Today's Visits"),
        ("pending_reminders", "Pending Reminders"),
        ("completed_tasks", "Completed Tasks"),
        ("register_patient", "Register Patient"),
        ("age", "Age"),
        ("gender", "Gender"),
        ("status", "Status"),
        ("male", "Male"),
        ("female", "Female"),
        ("other", "Other"),
        ("submit", "Submit"),
        ("male_patients", "Male Patients"),
        ("female_patients", "Female Patients"),
        ("children_under_12", "Children (under 12)"),
        ("export_csv", "Export CSV"),
        ("export_pdf", "Export PDF"),
        ("asha_workers", "ASHA Workers"),
        ("area", "Area"),
        ("patients_in_sector", "Patients in Sector"),
        ("anc_due_this_week", "ANC Due This Week"),
        ("unresolved_cases", "Unresolved Cases"),
        ("no_patients", "No patients registered yet."),
        ("no_reminders", "No reminders for today."),
        ("support_email", "Support Email"),
        ("phone", "Phone"),
        ("address", "Address"),
    ])
});
