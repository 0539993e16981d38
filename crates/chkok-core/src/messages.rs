//! User-facing notification texts

/// Login succeeded
pub const LOGIN_SUCCESS: &str = "로그인 성공하였습니다.";

/// Login button label while a request is outstanding
pub const LOGIN_IN_PROGRESS: &str = "로그인 중입니다...";

/// Login button label when idle
pub const LOGIN_IDLE: &str = "로그인";

/// Email or password left blank
pub const LOGIN_MISSING_FIELDS: &str = "이메일과 비밀번호를 모두 입력해주세요.";

/// 400 on login
pub const LOGIN_BAD_REQUEST: &str = "잘못된 요청입니다. 입력 데이터를 확인해주세요.";

/// 401 anywhere
pub const SESSION_EXPIRED: &str = "토큰이 만료되었습니다. 다시 로그인 해주세요";

/// 403 on login
pub const LOGIN_FORBIDDEN: &str = "접근 권한이 없습니다.";

/// 429 on login
pub const LOGIN_RATE_LIMITED: &str =
    "로그인 시도 횟수를 초과했습니다. 15분 후 다시 시도해주세요";

/// 500 on login
pub const LOGIN_SERVER_ERROR: &str = "서버 오류가 발생했습니다. 나중에 다시 시도해주세요.";

/// 403 on the statistics endpoint
pub const STATS_ADMIN_ONLY: &str = "사용자 통계 조회는 관리자만 가능합니다.";

/// 500 on the statistics endpoint
pub const STATS_DATABASE_ERROR: &str = "사용자 통계 조회 실패 : 데이터베이스 연결 오류.";

/// No response was received
pub const NETWORK_ERROR: &str = "서버에 연결할 수 없습니다. 네트워크 상태를 확인해주세요.";

/// A 2xx body did not match the expected shape
pub const INVALID_RESPONSE: &str = "서버 응답을 처리할 수 없습니다.";

/// Logged out from the header
pub const LOGGED_OUT: &str = "로그아웃 되었습니다.";

/// Fallback for status codes without a dedicated message
pub fn unexpected_status(status: u16) -> String {
    format!("알 수 없는 오류가 발생했습니다. (HTTP {status})")
}
