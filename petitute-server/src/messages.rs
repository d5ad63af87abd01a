//! User-facing status messages (Thai, as shown in the shop)

pub const LOGIN_OK: &str = "เข้าสู่ระบบเรียบร้อย";
pub const LOGIN_FAILED: &str = "ชื่อผู้ใช้หรือรหัสผ่านไม่ถูกต้อง";
pub const LOGIN_REQUIRED: &str = "กรุณาเข้าสู่ระบบก่อน";
pub const SESSION_EXPIRED: &str = "เซสชันหมดอายุ กรุณาเข้าสู่ระบบใหม่";
pub const LOGGED_OUT: &str = "ออกจากระบบแล้ว";

pub const CUSTOMER_SAVED: &str = "บันทึกลูกค้าแล้ว";
pub const CUSTOMER_NOT_FOUND: &str = "ไม่พบข้อมูลลูกค้า";

pub const BOOKING_CREATED: &str = "จองเสร็จแล้ว (ยังไม่ชำระ)";
pub const BOOKING_NOT_FOUND: &str = "ไม่พบรายการจอง";
pub const UNKNOWN_SERVICE: &str = "ประเภทบริการไม่ถูกต้อง";
pub const INVALID_START: &str = "รูปแบบวันเวลาเริ่มต้นไม่ถูกต้อง";

pub const PAYMENT_DONE: &str = "ชำระเงินเรียบร้อย";
pub const ALREADY_PAID: &str = "รายการนี้ชำระเงินแล้ว";
