#[cfg(test)]
mod tests {
    use crate::forms::{LoginForm, ProfileForm, RegisterForm, RepairRecordForm, TrackTicketForm};
    use crate::status::RepairStatus;

    fn valid_record_form() -> RepairRecordForm {
        RepairRecordForm {
            customer_name: "Juan Pérez".to_string(),
            customer_email: "juan@ejemplo.com".to_string(),
            customer_phone: "+1 234 567 8900".to_string(),
            brand: "Dell".to_string(),
            model: "Inspiron 15".to_string(),
            serial_number: "ABC123456789".to_string(),
            issue_description: "No enciende después de una caída".to_string(),
            status: "pending".to_string(),
            technician_notes: String::new(),
            estimated_cost: String::new(),
        }
    }

    #[test]
    fn test_valid_record_form_passes() {
        let data = valid_record_form().validate().unwrap();
        assert_eq!(data.customer_name, "Juan Pérez");
        assert_eq!(data.status, RepairStatus::Pending);
        assert_eq!(data.customer_phone.as_deref(), Some("+1 234 567 8900"));
        // Empty optional fields are stored as absent, not empty strings.
        assert_eq!(data.technician_notes, None);
        assert_eq!(data.estimated_cost, None);
    }

    #[test]
    fn test_every_missing_required_field_is_reported() {
        let form = RepairRecordForm {
            customer_name: "J".to_string(),         // below minimum
            customer_email: "not-an-email".to_string(),
            brand: String::new(),
            model: String::new(),
            issue_description: "too short".to_string(),
            ..valid_record_form()
        };
        let errors = form.validate().unwrap_err();
        for field in [
            "customer_name",
            "customer_email",
            "brand",
            "model",
            "issue_description",
        ] {
            assert!(
                errors.contains_field(field),
                "expected an error for {field}, got: {errors}"
            );
        }
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_field_length_maximums() {
        let form = RepairRecordForm {
            customer_name: "x".repeat(101),
            brand: "x".repeat(101),
            model: "x".repeat(101),
            issue_description: "x".repeat(2001),
            ..valid_record_form()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.contains_field("customer_name"));
        assert!(errors.contains_field("brand"));
        assert!(errors.contains_field("model"));
        assert!(errors.contains_field("issue_description"));
    }

    #[test]
    fn test_length_limits_count_characters_not_bytes() {
        // 100 accented characters are 200 bytes but still within limits.
        let form = RepairRecordForm {
            customer_name: "é".repeat(100),
            ..valid_record_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        let form = RepairRecordForm {
            status: "exploded".to_string(),
            ..valid_record_form()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.contains_field("status"));
    }

    #[test]
    fn test_any_selectable_status_is_accepted_any_time() {
        // No transition guard: the edit form may set any value, including
        // walking a completed record back to pending.
        for status in RepairStatus::SELECTABLE {
            let form = RepairRecordForm {
                status: status.as_str().to_string(),
                ..valid_record_form()
            };
            assert_eq!(form.validate().unwrap().status, status);
        }
    }

    #[test]
    fn test_estimated_cost_empty_is_absent() {
        let data = RepairRecordForm {
            estimated_cost: String::new(),
            ..valid_record_form()
        }
        .validate()
        .unwrap();
        assert_eq!(data.estimated_cost, None);
    }

    #[test]
    fn test_estimated_cost_zero_is_zero_not_absent() {
        let data = RepairRecordForm {
            estimated_cost: "0".to_string(),
            ..valid_record_form()
        }
        .validate()
        .unwrap();
        assert_eq!(data.estimated_cost, Some(0.0));
    }

    #[test]
    fn test_estimated_cost_rejects_negative_and_garbage() {
        for bad in ["-5", "abc", "NaN", "inf"] {
            let errors = RepairRecordForm {
                estimated_cost: bad.to_string(),
                ..valid_record_form()
            }
            .validate()
            .unwrap_err();
            assert!(
                errors.contains_field("estimated_cost"),
                "{bad:?} should fail the cost rule"
            );
        }
    }

    #[test]
    fn test_estimated_cost_accepts_decimals() {
        let data = RepairRecordForm {
            estimated_cost: "150.50".to_string(),
            ..valid_record_form()
        }
        .validate()
        .unwrap();
        assert_eq!(data.estimated_cost, Some(150.50));
    }

    #[test]
    fn test_profile_form() {
        let data = ProfileForm {
            full_name: "Ana García".to_string(),
            phone: String::new(),
        }
        .validate()
        .unwrap();
        assert_eq!(data.full_name, "Ana García");
        assert_eq!(data.phone, None);

        let errors = ProfileForm {
            full_name: "A".to_string(),
            phone: String::new(),
        }
        .validate()
        .unwrap_err();
        assert!(errors.contains_field("full_name"));
    }

    #[test]
    fn test_track_form_normalizes_and_validates() {
        let ticket = TrackTicketForm {
            ticket_number: "rt-20250615-0007".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(ticket.as_str(), "RT-20250615-0007");

        let errors = TrackTicketForm {
            ticket_number: "RT-123".to_string(),
        }
        .validate()
        .unwrap_err();
        assert!(errors.contains_field("ticket_number"));
    }

    #[test]
    fn test_login_form() {
        assert!(LoginForm {
            email: "tech@repair.example".to_string(),
            password: "secret1".to_string(),
        }
        .validate()
        .is_ok());

        let errors = LoginForm {
            email: "nope".to_string(),
            password: "short".to_string(),
        }
        .validate()
        .unwrap_err();
        assert!(errors.contains_field("email"));
        assert!(errors.contains_field("password"));
    }

    fn valid_register_form() -> RegisterForm {
        RegisterForm {
            full_name: "Juan Pérez".to_string(),
            email: "juan@ejemplo.com".to_string(),
            phone: String::new(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_register_form_passes_and_drops_confirmation() {
        let registration = valid_register_form().validate().unwrap();
        assert_eq!(registration.email, "juan@ejemplo.com");
        assert_eq!(registration.phone, None);
        assert_eq!(registration.password, "secret1");
    }

    #[test]
    fn test_password_mismatch_is_attached_to_confirmation_field() {
        // Both passwords individually satisfy the length rules; the
        // mismatch alone must fail, on confirm_password.
        let errors = RegisterForm {
            confirm_password: "secret2".to_string(),
            ..valid_register_form()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_field("confirm_password"));
    }

    #[test]
    fn test_register_password_length_limits() {
        let errors = RegisterForm {
            password: "x".repeat(101),
            confirm_password: "x".repeat(101),
            ..valid_register_form()
        }
        .validate()
        .unwrap_err();
        assert!(errors.contains_field("password"));
    }
}
