use leptos::*;
use clientcard::{format_money, PaymentProgress};

/// Width style for the filled part of the bar.
fn fill_style(progress: &PaymentProgress) -> String {
    format!("width: {:.0}%;", progress.clamped_percent())
}

fn fill_class(progress: &PaymentProgress) -> &'static str {
    if progress.is_complete() {
        "h-full rounded-full bg-emerald-500"
    } else {
        "h-full rounded-full bg-blue-500"
    }
}

#[component]
pub fn PaymentProgressBar(progress: f64, remaining_amount: f64) -> impl IntoView {
    let payment = PaymentProgress { progress, remaining_amount };

    view! {
        <div class="payment-progress flex flex-col gap-1 min-w-0">
            <div class="flex items-center gap-2">
                <div class="w-20 h-1.5 bg-gray-200 rounded-full overflow-hidden">
                    <div class=fill_class(&payment) style=fill_style(&payment)></div>
                </div>
                <span class="text-xs text-gray-500">
                    {format!("{:.0}%", payment.clamped_percent())}
                </span>
            </div>
            <div class="text-xs text-gray-500 whitespace-nowrap">
                "Остаток: " {format_money(payment.remaining_amount)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style_clamps() {
        let p = |progress| PaymentProgress { progress, remaining_amount: 0.0 };
        assert_eq!(fill_style(&p(42.4)), "width: 42%;");
        assert_eq!(fill_style(&p(250.0)), "width: 100%;");
        assert_eq!(fill_style(&p(-10.0)), "width: 0%;");
    }

    #[test]
    fn test_fill_class_complete() {
        let p = |progress| PaymentProgress { progress, remaining_amount: 0.0 };
        assert!(fill_class(&p(100.0)).contains("bg-emerald-500"));
        assert!(fill_class(&p(60.0)).contains("bg-blue-500"));
    }
}
